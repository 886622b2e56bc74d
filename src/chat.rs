//! Chat assembly: from an extracted archive to ordered [`ParsedMessage`]s.
//!
//! ```text
//! raw lines ─► reassemble ─► split_stamp ─► split_sender ─► classify ─► Chat
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatreplay::attachment::NoAttachments;
//! use chatreplay::chat::parse_str;
//!
//! let transcript = "\
//! 1/2/23, 10:00 AM - Bob joined using this group's invite link
//! 1/2/23, 10:01 AM - Bob: Hi all
//! 1/2/23, 10:02 AM - Alice: Hello
//! Bob";
//!
//! let chat = parse_str(transcript, &NoAttachments)?;
//! assert_eq!(chat.len(), 3);
//! assert_eq!(chat.names(), vec!["Alice", "Bob"]);
//! assert_eq!(chat.messages()[2].body, "Hello Bob");
//! # Ok::<(), chatreplay::ChatError>(())
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::attachment::{ArchiveDir, AttachmentSource, classify};
use crate::config::ChatConfig;
use crate::error::{ChatError, Result};
use crate::message::{MessageType, ParsedMessage};
use crate::parsing::{reassemble, split_sender, split_stamp};

/// An ordered, fully parsed chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chat {
    messages: Vec<ParsedMessage>,
}

impl Chat {
    /// Wraps already parsed messages.
    pub fn new(messages: Vec<ParsedMessage>) -> Self {
        Self { messages }
    }

    /// Returns the messages in transcript order.
    pub fn messages(&self) -> &[ParsedMessage] {
        &self.messages
    }

    /// Consumes the chat, returning its messages.
    pub fn into_messages(self) -> Vec<ParsedMessage> {
        self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the transcript held no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sorted, deduplicated sender names.
    pub fn names(&self) -> Vec<String> {
        names(&self.messages)
    }

    /// Returns `true` if `name` sent at least one message.
    pub fn has_sender(&self, name: &str) -> bool {
        self.messages.iter().any(|msg| msg.sender() == Some(name))
    }
}

impl IntoIterator for Chat {
    type Item = ParsedMessage;
    type IntoIter = std::vec::IntoIter<ParsedMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

/// Collects every sender, sorted and deduplicated.
///
/// System notices have no sender and contribute nothing.
pub fn names(messages: &[ParsedMessage]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|msg| msg.sender.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Parses one logical message.
///
/// `position` is the 1-based index used in error reports.
pub fn parse_message(
    logical: &str,
    position: usize,
    source: &dyn AttachmentSource,
) -> Result<ParsedMessage> {
    let stamp =
        split_stamp(logical).map_err(|err| ChatError::tampered(position, err.to_string()))?;

    let Some((sender, body)) = split_sender(stamp.rest) else {
        return Ok(ParsedMessage::new(
            stamp.date,
            stamp.time,
            MessageType::Info,
            stamp.rest,
        ));
    };

    let classified = classify(body, source);
    Ok(
        ParsedMessage::new(stamp.date, stamp.time, classified.kind, classified.body)
            .with_sender(sender)
            .with_edited(classified.edited),
    )
}

/// Runs the whole pipeline over raw transcript lines.
///
/// # Errors
///
/// Returns [`ChatError::TamperedInput`] if the first line is not a message
/// start or any logical message lacks a valid stamp. No partial chat is
/// returned.
pub fn assemble<I, S>(lines: I, source: &dyn AttachmentSource) -> Result<Chat>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let logical = reassemble(lines)?;
    let messages = logical
        .iter()
        .enumerate()
        .map(|(index, message)| parse_message(message, index + 1, source))
        .collect::<Result<Vec<_>>>()?;

    debug!(messages = messages.len(), "assembled chat");
    Ok(Chat::new(messages))
}

/// Parses a whole transcript held in memory.
pub fn parse_str(content: &str, source: &dyn AttachmentSource) -> Result<Chat> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    assemble(content.lines(), source)
}

/// Locates the chat transcript inside an extracted archive.
///
/// Candidates are checked in file name order; the first one matching the
/// configured prefix and extension wins.
///
/// # Errors
///
/// Returns [`ChatError::NotFound`] if the directory is missing or holds no
/// matching file.
pub fn find_transcript(dir: impl AsRef<Path>, config: &ChatConfig) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let not_found = || {
        ChatError::not_found(
            dir,
            config.transcript_prefix.as_str(),
            config.transcript_extension.as_str(),
        )
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(not_found()),
        Err(err) => return Err(err.into()),
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if config.matches_transcript(name) {
                candidates.push(name.to_string());
            }
        }
    }
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .map(|name| dir.join(name))
        .ok_or_else(not_found)
}

/// Reads and parses the chat of an extracted archive directory.
pub fn load_chat(dir: impl AsRef<Path>, config: &ChatConfig) -> Result<Chat> {
    let dir = dir.as_ref();
    let path = find_transcript(dir, config)?;
    info!(path = %path.display(), "reading chat transcript");

    let content = fs::read_to_string(&path)?;
    let source = ArchiveDir::new(dir).with_rename_sniffed(config.rename_sniffed);
    parse_str(&content, &source)
}

/// Parser bound to a [`ChatConfig`].
///
/// # Example
///
/// ```rust,no_run
/// use chatreplay::chat::ChatParser;
///
/// let chat = ChatParser::new().load("static/chat-details")?;
/// println!("{} messages from {:?}", chat.len(), chat.names());
/// # Ok::<(), chatreplay::ChatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ChatConfig,
}

impl ChatParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ChatConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Loads the chat of an extracted archive directory.
    pub fn load(&self, dir: impl AsRef<Path>) -> Result<Chat> {
        load_chat(dir, &self.config)
    }

    /// Locates the transcript without parsing it.
    pub fn find_transcript(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        find_transcript(dir, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::NoAttachments;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_message_text() {
        let msg =
            parse_message("1/2/23, 10:00 AM - Alice: Hello: world", 1, &NoAttachments).unwrap();
        assert_eq!(msg.date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(msg.time, "10:00 AM");
        assert_eq!(msg.sender(), Some("Alice"));
        assert_eq!(msg.body, "Hello: world");
        assert_eq!(msg.kind, MessageType::Text);
        assert!(!msg.edited);
    }

    #[test]
    fn test_parse_message_info() {
        let msg = parse_message(
            "1/2/23, 9:00 AM - Messages and calls are end-to-end encrypted.",
            1,
            &NoAttachments,
        )
        .unwrap();
        assert!(msg.is_info());
        assert_eq!(msg.sender(), None);
        assert_eq!(msg.body, "Messages and calls are end-to-end encrypted.");
    }

    #[test]
    fn test_parse_message_reports_position() {
        let err = parse_message("1/2/23 - Alice: Hi", 7, &NoAttachments).unwrap_err();
        assert!(err.is_tampered());
        assert!(err.to_string().contains("message 7"));
    }

    #[test]
    fn test_names() {
        let chat = parse_str(
            "1/2/23, 10:00 - Bob: a\n1/2/23, 10:01 - Alice: b\n\
             1/2/23, 10:02 - Bob left\n1/2/23, 10:03 - Bob: c",
            &NoAttachments,
        )
        .unwrap();
        assert_eq!(chat.names(), vec!["Alice", "Bob"]);
        assert!(chat.has_sender("Alice"));
        assert!(!chat.has_sender("Carol"));
    }

    #[test]
    fn test_parse_str_strips_bom_and_crlf() {
        let chat = parse_str("\u{feff}1/2/23, 10:00 - Bob: a\r\nmore\r\n", &NoAttachments).unwrap();
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages()[0].body, "a more");
    }

    #[test]
    fn test_tampered_transcript_yields_nothing() {
        let err = parse_str("hello\n1/2/23, 10:00 - Bob: a", &NoAttachments).unwrap_err();
        assert!(err.is_tampered());
    }

    #[test]
    fn test_find_transcript_missing_dir() {
        let err = find_transcript("/definitely/not/here", &ChatConfig::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_chat_serializes_as_array() {
        let chat = parse_str("1/2/23, 10:00 - Bob: a", &NoAttachments).unwrap();
        let json = serde_json::to_string(&chat).unwrap();
        assert!(json.starts_with('['));
    }
}
