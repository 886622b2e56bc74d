//! # Chatreplay
//!
//! A Rust library for turning an extracted WhatsApp chat export (a `.txt`
//! transcript plus its attachment files) into an ordered list of typed,
//! structured messages that a chat renderer can replay.
//!
//! ## Overview
//!
//! Parsing runs in three stages:
//! - **Reassembly** - physical lines are merged into logical messages, since a
//!   multi-line message continues on lines that carry no date stamp
//! - **Splitting** - each logical message is split into date, time, sender and body
//! - **Classification** - the body is typed (text, sticker, image, audio, video,
//!   contact, document, pdf, info) and normalized, reading contact cards and
//!   sniffing file signatures through an [`AttachmentSource`](attachment::AttachmentSource)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatreplay::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let chat = ChatParser::new().load("extracted_archive/")?;
//!
//!     let mut session = ChatSession::new(chat);
//!     println!("Participants: {:?}", session.names());
//!     session.select_user("Alice")?;
//!
//!     let config = OutputConfig::new().with_viewer("Alice");
//!     write_json(session.chat().messages(), "chat.json", &config)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Parsing Without a Directory
//!
//! ```rust
//! use chatreplay::attachment::NoAttachments;
//! use chatreplay::chat::parse_str;
//! use chatreplay::MessageType;
//!
//! let transcript = "1/2/23, 10:00 AM - Alice: Hello\nsecond line\n1/2/23, 10:05 AM - Bob left";
//! let chat = parse_str(transcript, &NoAttachments).unwrap();
//!
//! assert_eq!(chat.len(), 2);
//! assert_eq!(chat.messages()[0].body, "Hello second line");
//! assert_eq!(chat.messages()[1].kind, MessageType::Info);
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Line reassembly and stamp/sender splitting
//! - [`attachment`] - Message classification, contact cards, file signature sniffing
//! - [`chat`] - Transcript discovery and the parsing pipeline ([`ChatParser`](chat::ChatParser))
//! - [`session`] - Participant listing and viewer selection
//! - [`message`] - [`ParsedMessage`] and [`MessageType`]
//! - [`config`] - [`ChatConfig`](config::ChatConfig)
//! - [`output`] - JSON, JSONL and CSV writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - Unified error types ([`ChatError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod attachment;
pub mod chat;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parsing;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use chat::Chat;
pub use error::{ChatError, Result};
pub use message::{MessageType, ParsedMessage};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatreplay::prelude::*;
/// ```
pub mod prelude {
    // Messages
    pub use crate::message::{MessageType, ParsedMessage};

    // Error types
    pub use crate::error::{ChatError, Result};

    // Pipeline
    pub use crate::attachment::{ArchiveDir, AttachmentSource, NoAttachments};
    pub use crate::chat::{Chat, ChatParser, load_chat, parse_str};
    pub use crate::config::ChatConfig;
    pub use crate::session::ChatSession;

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::output::OutputConfig;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
}
