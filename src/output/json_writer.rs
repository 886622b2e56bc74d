//! JSON output writer.

use std::fs::File;
use std::io::Write;

use super::{OutputConfig, records};
use crate::error::Result;
use crate::message::ParsedMessage;

/// Writes messages to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"date": "2023-01-02", "time": "10:00 AM", "sender": "Alice", "type": "text", "body": "Hi", "edited": false}
/// ]
/// ```
pub fn write_json(messages: &[ParsedMessage], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a JSON array string.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(messages, config))?)
}
