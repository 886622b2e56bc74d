//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::{OutputConfig, OutputRecord, records};
use crate::error::Result;
use crate::message::ParsedMessage;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Sender`, `Type`, `Body`, `Edited`, plus
///   `Outgoing` when a viewer is configured
/// - Encoding: UTF-8
pub fn write_csv(messages: &[ParsedMessage], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, messages, config)
}

/// Converts messages to a CSV string.
pub fn to_csv(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, messages, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    target: W,
    messages: &[ParsedMessage],
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(target);

    writer.write_record(build_header(config))?;
    for record in records(messages, config) {
        writer.write_record(build_record(&record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Date", "Time", "Sender", "Type", "Body", "Edited"];
    if config.viewer.is_some() {
        header.push("Outgoing");
    }
    header
}

/// Build CSV record for a single message.
fn build_record(record: &OutputRecord<'_>) -> Vec<String> {
    let mut row = vec![
        record.date.clone(),
        record.time.to_string(),
        record.sender.unwrap_or_default().to_string(),
        record.kind.to_string(),
        record.body.to_string(),
        record.edited.to_string(),
    ];
    if let Some(outgoing) = record.outgoing {
        row.push(outgoing.to_string());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageType;
    use chrono::NaiveDate;

    fn sample() -> Vec<ParsedMessage> {
        let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        vec![
            ParsedMessage::new(date, "10:00 AM", MessageType::Text, "Hello; with \"quotes\"")
                .with_sender("Alice"),
            ParsedMessage::new(date, "10:01 AM", MessageType::Info, "Bob left"),
        ]
    }

    #[test]
    fn test_to_csv_header_and_escaping() {
        let csv = to_csv(&sample(), &OutputConfig::new()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date;Time;Sender;Type;Body;Edited"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("2023-01-02;10:00 AM;Alice;text;"));
        assert!(first.contains("\"Hello; with \"\"quotes\"\"\""));
        assert_eq!(lines.next(), Some("2023-01-02;10:01 AM;;info;Bob left;false"));
    }

    #[test]
    fn test_to_csv_with_viewer() {
        let csv = to_csv(&sample(), &OutputConfig::new().with_viewer("Alice")).unwrap();
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.get(6), Some("Outgoing"));
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows[0].get(6), Some("true"));
        assert_eq!(rows[1].get(6), Some("false"));
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.csv");
        write_csv(&sample(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();
        assert!(std::fs::read_to_string(path).unwrap().contains("Bob left"));
    }
}
