//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits line-oriented tools such as `jq` or
//! `grep` better than a single array.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::{OutputConfig, records};
use crate::error::Result;
use crate::message::ParsedMessage;

/// Writes messages to a JSONL file.
pub fn write_jsonl(
    messages: &[ParsedMessage],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in records(messages, config) {
        serde_json::to_writer(&mut writer, &record)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String> {
    let mut output = String::new();
    for record in records(messages, config) {
        output.push_str(&serde_json::to_string(&record)?);
        output.push('\n');
    }
    Ok(output)
}
