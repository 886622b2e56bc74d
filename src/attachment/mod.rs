//! Attachment handling: classification, signature sniffing and contact cards.
//!
//! The classifier never opens files itself. Everything it needs from the
//! extracted archive goes through [`AttachmentSource`], so tests can swap the
//! directory for an in-memory fake.

pub mod classify;
pub mod contact;
pub mod sniff;

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

pub use classify::{ATTACHMENT_MARKER, Classified, EDIT_MARKER, MEDIA_OMITTED, classify};
pub use contact::{Contact, UNRESOLVED_CONTACT, normalize_phone, parse_vcard, resolve_contact};
pub use sniff::{SIGNATURES, Signature, Sniffed, detect_signature, sniff_file, sniffed_name};

/// Access to the files an archive transcript refers to.
pub trait AttachmentSource {
    /// Reads a referenced text file, such as a contact card.
    ///
    /// Returns `None` if the file cannot be opened or is not UTF-8.
    fn read_text(&self, file_name: &str) -> Option<String>;

    /// Inspects the binary signature of a referenced file.
    ///
    /// Returns `None` if the file cannot be opened or no known signature
    /// matches.
    fn sniff(&self, file_name: &str) -> Option<Sniffed>;
}

/// An [`AttachmentSource`] for transcripts parsed without their archive.
///
/// Every lookup fails, so contacts resolve to `"|"` and only name-based
/// type detection applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAttachments;

impl AttachmentSource for NoAttachments {
    fn read_text(&self, _file_name: &str) -> Option<String> {
        None
    }

    fn sniff(&self, _file_name: &str) -> Option<Sniffed> {
        None
    }
}

/// The directory an archive was extracted into.
#[derive(Debug, Clone)]
pub struct ArchiveDir {
    root: PathBuf,
    rename_sniffed: bool,
}

impl ArchiveDir {
    /// Creates a source rooted at `root` that renames sniffed files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rename_sniffed: true,
        }
    }

    /// Sets whether files get renamed after their signature was detected.
    #[must_use]
    pub fn with_rename_sniffed(mut self, rename: bool) -> Self {
        self.rename_sniffed = rename;
        self
    }

    /// Returns the archive root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins a transcript-referenced name onto the root.
    ///
    /// Names that are not a single plain file name are rejected, so a
    /// transcript cannot point outside the archive.
    fn path_of(&self, file_name: &str) -> Option<PathBuf> {
        let name = Path::new(file_name);
        let mut components = name.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(name)),
            _ => {
                warn!(file_name, "ignoring attachment reference outside the archive");
                None
            }
        }
    }
}

impl AttachmentSource for ArchiveDir {
    fn read_text(&self, file_name: &str) -> Option<String> {
        let path = self.path_of(file_name)?;
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "attachment could not be read");
                None
            }
        }
    }

    fn sniff(&self, file_name: &str) -> Option<Sniffed> {
        let path = self.path_of(file_name)?;
        match sniff_file(&path, self.rename_sniffed) {
            Ok(sniffed) => sniffed,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "attachment could not be sniffed");
                None
            }
        }
    }
}
