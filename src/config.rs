//! Configuration for locating and parsing an extracted chat archive.
//!
//! The transcript line format itself is fixed; only the archive lookup and
//! the attachment side effects are configurable.
//!
//! # Example
//!
//! ```rust
//! use chatreplay::config::ChatConfig;
//!
//! let config = ChatConfig::new()
//!     .with_transcript_prefix("WhatsApp Chat")
//!     .with_rename_sniffed(false);
//!
//! assert!(config.matches_transcript("WhatsApp Chat with Bob.txt"));
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`load_chat`](crate::chat::load_chat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// File name prefix of the transcript (default: `WhatsApp`)
    pub transcript_prefix: String,

    /// File extension of the transcript, without dot (default: `txt`)
    pub transcript_extension: String,

    /// Rename attachments whose file signature was detected (default: true)
    pub rename_sniffed: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            transcript_prefix: "WhatsApp".to_string(),
            transcript_extension: "txt".to_string(),
            rename_sniffed: true,
        }
    }
}

impl ChatConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transcript file name prefix.
    #[must_use]
    pub fn with_transcript_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.transcript_prefix = prefix.into();
        self
    }

    /// Sets the transcript file extension (a leading dot is ignored).
    #[must_use]
    pub fn with_transcript_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.transcript_extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Sets whether sniffed attachments get renamed on disk.
    #[must_use]
    pub fn with_rename_sniffed(mut self, rename: bool) -> Self {
        self.rename_sniffed = rename;
        self
    }

    /// Returns `true` if `file_name` looks like the chat transcript.
    pub fn matches_transcript(&self, file_name: &str) -> bool {
        let Some((stem, extension)) = file_name.rsplit_once('.') else {
            return false;
        };
        !stem.is_empty()
            && extension.eq_ignore_ascii_case(&self.transcript_extension)
            && file_name.starts_with(&self.transcript_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.transcript_prefix, "WhatsApp");
        assert_eq!(config.transcript_extension, "txt");
        assert!(config.rename_sniffed);
    }

    #[test]
    fn test_builder() {
        let config = ChatConfig::new()
            .with_transcript_prefix("Chat")
            .with_transcript_extension(".log")
            .with_rename_sniffed(false);
        assert_eq!(config.transcript_prefix, "Chat");
        assert_eq!(config.transcript_extension, "log");
        assert!(!config.rename_sniffed);
    }

    #[test]
    fn test_matches_transcript() {
        let config = ChatConfig::default();
        assert!(config.matches_transcript("WhatsApp Chat with Alice.txt"));
        assert!(config.matches_transcript("WhatsApp.TXT"));
        assert!(!config.matches_transcript("Chat with Alice.txt"));
        assert!(!config.matches_transcript("WhatsApp Chat with Alice.vcf"));
        assert!(!config.matches_transcript("WhatsApp"));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ChatConfig = serde_json::from_str(r#"{"rename_sniffed": false}"#).unwrap();
        assert_eq!(config.transcript_prefix, "WhatsApp");
        assert!(!config.rename_sniffed);
    }
}
