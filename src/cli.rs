//! Command-line interface definition using clap.
//!
//! [`Args`] is exposed from the library so the argument surface can be
//! tested without spawning the binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::ChatConfig;
use crate::format::OutputFormat;
use crate::output::OutputConfig;

/// Default output path; its extension follows `--format` when left unchanged.
pub const DEFAULT_OUTPUT: &str = "chat.json";

/// Parse an extracted WhatsApp chat export into structured messages
/// ready for replay.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatreplay")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatreplay ./chat-details
    chatreplay ./chat-details --names
    chatreplay ./chat-details --me Alice -o alice.csv -f csv
    chatreplay ./chat-details --no-info --format jsonl -vv")]
pub struct Args {
    /// Directory holding the extracted archive
    pub dir: PathBuf,

    /// Participant viewing the chat (marks their messages as outgoing)
    #[arg(long, value_name = "NAME")]
    pub me: Option<String>,

    /// Print the participant names and exit
    #[arg(long)]
    pub names: bool,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Leave system notices out of the output
    #[arg(long)]
    pub no_info: bool,

    /// Do not rename attachments whose signature reveals a PDF
    #[arg(long)]
    pub no_rename: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the parser configuration from the flags.
    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig::new().with_rename_sniffed(!self.no_rename)
    }

    /// Builds the writer configuration from the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if let Some(ref me) = self.me {
            config = config.with_viewer(me.clone());
        }
        if self.no_info {
            config = config.without_info();
        }
        config
    }

    /// Output path, with the extension adjusted to the format when the
    /// default path is in use.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        format!("chat.{}", self.format.extension())
    }

    /// Log filter directive implied by `-v`, if any.
    pub fn log_directive(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("chatreplay=debug"),
            _ => Some("chatreplay=trace"),
        }
    }
}
