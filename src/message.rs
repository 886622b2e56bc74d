//! Structured message records produced by the transcript parser.
//!
//! Every logical message of a transcript becomes exactly one [`ParsedMessage`].
//! The [`MessageType`] tells the rendering layer how to interpret the `body`:
//!
//! | Type | Body |
//! |------|------|
//! | `text` | message text |
//! | `sticker`, `image`, `audio`, `video`, `document`, `pdf` | `file_name\|caption` |
//! | `contact` | `Name\|Phone` resolved from the shared vCard |
//! | `info` | system notice, no sender |
//!
//! # Example
//!
//! ```
//! use chatreplay::{MessageType, ParsedMessage};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
//! let msg = ParsedMessage::new(date, "10:00 AM", MessageType::Image, "IMG-001.jpg|Look")
//!     .with_sender("Alice");
//!
//! assert_eq!(msg.attachment(), Some(("IMG-001.jpg", "Look")));
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Content type of a parsed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Plain text
    #[default]
    Text,
    /// Sticker attachment (`STK-…`)
    Sticker,
    /// Image attachment (`IMG-…`)
    Image,
    /// Voice note or audio file (`PTT-…`, `AUD-…`)
    Audio,
    /// Video attachment (`VID-…`)
    Video,
    /// Shared contact card (`….vcf`)
    Contact,
    /// Any other attached file
    Document,
    /// PDF document, by name or by signature
    Pdf,
    /// System notice without a sender
    Info,
}

impl MessageType {
    /// Returns the lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Sticker => "sticker",
            MessageType::Image => "image",
            MessageType::Audio => "audio",
            MessageType::Video => "video",
            MessageType::Contact => "contact",
            MessageType::Document => "document",
            MessageType::Pdf => "pdf",
            MessageType::Info => "info",
        }
    }

    /// Returns all message types.
    pub fn all() -> &'static [MessageType] {
        &[
            MessageType::Text,
            MessageType::Sticker,
            MessageType::Image,
            MessageType::Audio,
            MessageType::Video,
            MessageType::Contact,
            MessageType::Document,
            MessageType::Pdf,
            MessageType::Info,
        ]
    }

    /// Returns `true` for types whose body references an archive file.
    pub fn is_file(&self) -> bool {
        matches!(
            self,
            MessageType::Sticker
                | MessageType::Image
                | MessageType::Audio
                | MessageType::Video
                | MessageType::Document
                | MessageType::Pdf
        )
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown message type: '{}'", s))
    }
}

/// One chat entry after reassembly, splitting and classification.
///
/// # Serialization
///
/// The type is serialized under the key `type`, the date as `YYYY-MM-DD`,
/// and `sender` is omitted for `info` messages.
///
/// ```
/// use chatreplay::{MessageType, ParsedMessage};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
/// let msg = ParsedMessage::new(date, "10:00", MessageType::Info, "Alice joined");
/// let json = serde_json::to_string(&msg)?;
///
/// assert!(json.contains("\"type\":\"info\""));
/// assert!(!json.contains("sender"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Calendar date of the message.
    pub date: NaiveDate,

    /// Time of day exactly as exported (e.g. `10:00 AM`).
    pub time: String,

    /// Display name of the author; `None` for system notices.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sender: Option<String>,

    /// Cleaned message body.
    pub body: String,

    /// Content type.
    #[serde(rename = "type")]
    pub kind: MessageType,

    /// Whether the message carried the edit marker.
    #[serde(default)]
    pub edited: bool,
}

impl ParsedMessage {
    /// Creates a message without sender that is not marked as edited.
    pub fn new(
        date: NaiveDate,
        time: impl Into<String>,
        kind: MessageType,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time: time.into(),
            sender: None,
            body: body.into(),
            kind,
            edited: false,
        }
    }

    /// Builder-style method to set the sender.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Builder-style method to set the edited flag.
    #[must_use]
    pub fn with_edited(mut self, edited: bool) -> Self {
        self.edited = edited;
        self
    }

    /// Returns the sender name, if any.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Returns `true` for system notices.
    pub fn is_info(&self) -> bool {
        self.kind == MessageType::Info
    }

    /// Returns `true` if the body references an archive file.
    pub fn is_attachment(&self) -> bool {
        self.kind.is_file()
    }

    /// Splits a file body into `(file_name, caption)`.
    ///
    /// Returns `None` for text, contact and info messages.
    pub fn attachment(&self) -> Option<(&str, &str)> {
        if !self.is_attachment() {
            return None;
        }
        Some(self.body.split_once('|').unwrap_or((self.body.as_str(), "")))
    }

    /// Splits a contact body into `(name, phone)`.
    ///
    /// Both parts are empty when the contact card could not be resolved.
    pub fn contact(&self) -> Option<(&str, &str)> {
        if self.kind != MessageType::Contact {
            return None;
        }
        self.body.split_once('|')
    }
}
