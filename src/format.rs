//! Output format selection.
//!
//! [`OutputFormat`] picks one of the writers in [`crate::output`]; it can be
//! parsed from a name or detected from a file extension.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatreplay::Result<()> {
//! use chatreplay::attachment::NoAttachments;
//! use chatreplay::chat::parse_str;
//! use chatreplay::format::{OutputFormat, to_format_string};
//! use chatreplay::output::OutputConfig;
//!
//! let chat = parse_str("1/2/23, 10:00 - Alice: Hi", &NoAttachments)?;
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! let jsonl = to_format_string(chat.messages(), format, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::message::ParsedMessage;
use crate::output::OutputConfig;

/// Output format for parsed chats.
///
/// - [`Json`](OutputFormat::Json) - Array of records, what a renderer loads (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - One record per line
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited table for spreadsheets
///
/// # Example
///
/// ```rust
/// use chatreplay::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// JSON array of records
    #[default]
    Json,

    /// JSON Lines - one record per line
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Returns the feature that enables this format's writer.
    pub fn feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatreplay::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("chat.csv").unwrap();
    /// assert_eq!(format, OutputFormat::Csv);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> ChatError {
    ChatError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.feature()
        ),
    )
}

/// Writes messages to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[ParsedMessage],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts messages to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[ParsedMessage],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
