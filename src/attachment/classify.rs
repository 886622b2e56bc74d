//! Message type classification.
//!
//! Attachments are announced as `FILE_NAME (file attached)`, optionally
//! followed by a caption. The export names media files with fixed prefixes
//! (`IMG-20230102-WA0001.jpg`), which is what the tag table keys on.

use std::sync::LazyLock;

use regex::Regex;

use super::contact::resolve_contact;
use super::{AttachmentSource, Sniffed};
use crate::message::MessageType;

/// Marker that follows the file name of an attachment.
pub const ATTACHMENT_MARKER: &str = "(file attached)";

/// Marker appended to edited messages.
pub const EDIT_MARKER: &str = "<This message was edited>";

/// Placeholder text of exports made without media.
pub const MEDIA_OMITTED: &str = "Media omitted";

/// File name prefixes checked in order; first match wins.
const TAG_TABLE: &[(&str, MessageType)] = &[
    ("STK", MessageType::Sticker),
    ("IMG", MessageType::Image),
    ("PTT", MessageType::Audio),
    ("AUD", MessageType::Audio),
    ("VID", MessageType::Video),
];

/// Prefix of exported documents.
const DOCUMENT_TAG: &str = "DOC";

static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[\w\s()-]+\.[a-zA-Z0-9]{2,5}\b").expect("valid file name pattern")
});

/// Outcome of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Detected message type
    pub kind: MessageType,
    /// Body with markers cleaned up
    pub body: String,
    /// Whether the edit marker was present
    pub edited: bool,
}

/// Classifies a message body and cleans it for display.
///
/// File bodies become `file_name|caption`, contact bodies become the
/// resolved `Name|Phone`. Bodies without the attachment marker are `text`.
/// A PDF found by its signature and renamed on disk is reported under the
/// new file name.
///
/// # Example
///
/// ```rust
/// use chatreplay::attachment::{NoAttachments, classify};
/// use chatreplay::MessageType;
///
/// let classified = classify("IMG-001.jpg (file attached)\n", &NoAttachments);
/// assert_eq!(classified.kind, MessageType::Image);
/// assert_eq!(classified.body, "IMG-001.jpg|");
/// ```
pub fn classify(body: &str, source: &dyn AttachmentSource) -> Classified {
    let body = body.trim_end_matches(['\r', '\n']);
    let (kind, renamed_to) = detect_kind(body, source);

    let mut body = match kind {
        MessageType::Text | MessageType::Info => body.to_string(),
        MessageType::Contact => resolve_contact(contact_file_name(body), source),
        MessageType::Pdf => pdf_body(body, renamed_to.as_deref()),
        _ => replace_marker(body),
    };
    if kind != MessageType::Text {
        body = body.trim_matches(' ').to_string();
    }

    let edited = body.contains(EDIT_MARKER);
    if let Some(stripped) = body.strip_suffix(EDIT_MARKER) {
        body = stripped.trim_end().to_string();
    }
    if body.contains(MEDIA_OMITTED) {
        body = body.replace('<', "");
    }

    Classified { kind, body, edited }
}

/// Picks the message type; the order of the checks is significant.
///
/// Also returns the new file name when sniffing renamed the attachment.
fn detect_kind(body: &str, source: &dyn AttachmentSource) -> (MessageType, Option<String>) {
    if !body.contains(ATTACHMENT_MARKER) {
        return (MessageType::Text, None);
    }

    if let Some(&(_, kind)) = TAG_TABLE.iter().find(|(tag, _)| body.starts_with(tag)) {
        return (kind, None);
    }
    if body.contains(".vcf") {
        return (MessageType::Contact, None);
    }
    if body.contains(".pdf") || body.contains(".PDF") {
        return (MessageType::Pdf, None);
    }
    if let Some(sniffed) = sniff_pdf(body, source) {
        return (MessageType::Pdf, sniffed.renamed_to);
    }
    if FILE_NAME_PATTERN.is_match(body) || body.contains(DOCUMENT_TAG) {
        return (MessageType::Document, None);
    }
    (MessageType::Text, None)
}

fn sniff_pdf(body: &str, source: &dyn AttachmentSource) -> Option<Sniffed> {
    let file_name = attached_file_name(body);
    if file_name.is_empty() {
        return None;
    }
    source.sniff(file_name).filter(Sniffed::is_pdf)
}

/// The file name in front of the attachment marker.
fn attached_file_name(body: &str) -> &str {
    body.split_once(ATTACHMENT_MARKER)
        .map_or(body, |(name, _)| name)
        .trim()
}

/// Everything up to and including the first `.vcf`.
fn contact_file_name(body: &str) -> &str {
    body.find(".vcf").map_or(body, |end| &body[..end + ".vcf".len()])
}

/// Turns `name (file attached) caption` into `name|caption`.
fn replace_marker(body: &str) -> String {
    match body.split_once(ATTACHMENT_MARKER) {
        Some((name, caption)) => format!("{}|{}", name.trim_end(), caption.trim_start()),
        None => body.to_string(),
    }
}

/// Document exports of PDFs lose their extension (`DOC-…-WA0004.`).
///
/// The `|` separator is kept, like every other file body.
fn pdf_body(body: &str, renamed_to: Option<&str>) -> String {
    let replaced = replace_marker(body);
    let Some((name, caption)) = replaced.split_once('|') else {
        return replaced;
    };
    if let Some(new_name) = renamed_to {
        return format!("{new_name}|{caption}");
    }
    if body.starts_with(DOCUMENT_TAG) && name.ends_with('.') {
        return format!("{name}pdf|{caption}");
    }
    replaced
}
