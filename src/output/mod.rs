//! Output writers for parsed chats.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Every writer emits the same record shape: date (`YYYY-MM-DD`), time,
//! sender, type, body, edited, and `outgoing` when a viewer is configured.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatreplay::Result<()> {
//! use chatreplay::attachment::NoAttachments;
//! use chatreplay::chat::parse_str;
//! use chatreplay::output::{OutputConfig, to_jsonl};
//!
//! let chat = parse_str("1/2/23, 10:00 - Alice: Hi", &NoAttachments)?;
//! let jsonl = to_jsonl(chat.messages(), &OutputConfig::new().with_viewer("Alice"))?;
//! assert!(jsonl.contains("\"outgoing\":true"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use serde::{Deserialize, Serialize};

use crate::message::{MessageType, ParsedMessage};

/// Controls which records are written and how they are annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Participant viewing the chat; adds an `outgoing` flag when set
    pub viewer: Option<String>,

    /// Include system notices (default: true)
    pub include_info: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            viewer: None,
            include_info: true,
        }
    }
}

impl OutputConfig {
    /// Creates a configuration that writes every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks messages of `name` as outgoing.
    #[must_use]
    pub fn with_viewer(mut self, name: impl Into<String>) -> Self {
        self.viewer = Some(name.into());
        self
    }

    /// Leaves system notices out of the output.
    #[must_use]
    pub fn without_info(mut self) -> Self {
        self.include_info = false;
        self
    }
}

/// Flat record shared by all writers.
#[cfg_attr(not(any(feature = "csv-output", feature = "json-output")), allow(dead_code))]
#[derive(Debug, Serialize)]
pub(crate) struct OutputRecord<'a> {
    pub date: String,
    pub time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<&'a str>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub body: &'a str,
    pub edited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<bool>,
}

#[cfg_attr(not(any(feature = "csv-output", feature = "json-output")), allow(dead_code))]
impl<'a> OutputRecord<'a> {
    fn from_message(msg: &'a ParsedMessage, config: &OutputConfig) -> Self {
        Self {
            date: msg.date.format("%Y-%m-%d").to_string(),
            time: &msg.time,
            sender: msg.sender(),
            kind: msg.kind,
            body: &msg.body,
            edited: msg.edited,
            outgoing: config
                .viewer
                .as_deref()
                .map(|viewer| msg.sender() == Some(viewer)),
        }
    }
}

/// Applies the configuration to a message slice.
#[cfg_attr(not(any(feature = "csv-output", feature = "json-output")), allow(dead_code))]
pub(crate) fn records<'a>(
    messages: &'a [ParsedMessage],
    config: &OutputConfig,
) -> Vec<OutputRecord<'a>> {
    messages
        .iter()
        .filter(|msg| config.include_info || !msg.is_info())
        .map(|msg| OutputRecord::from_message(msg, config))
        .collect()
}
