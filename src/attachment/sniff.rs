//! File signature sniffing.
//!
//! Exports sometimes drop the extension of shared documents
//! (`DOC-20230102-WA0004.`). The first bytes of the file still tell what it
//! is; a detected file can be renamed so the rendering layer links to a
//! usable name.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::{info, warn};

/// Number of leading bytes inspected.
pub const SIGNATURE_LEN: usize = 8;

/// Extension reported for PDF documents.
pub const PDF_EXTENSION: &str = ".pdf";

/// A known file signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Upper-case hex prefix of the file header
    pub magic: &'static str,
    /// Extension with leading dot
    pub extension: &'static str,
}

/// Signatures checked in order.
pub const SIGNATURES: &[Signature] = &[Signature {
    magic: "25504446",
    extension: PDF_EXTENSION,
}];

/// Result of a successful sniff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sniffed {
    /// Detected extension with leading dot
    pub extension: &'static str,
    /// New file name if the file was renamed on disk
    pub renamed_to: Option<String>,
}

impl Sniffed {
    /// Returns `true` if the detected type is PDF.
    pub fn is_pdf(&self) -> bool {
        self.extension == PDF_EXTENSION
    }
}

/// Matches a file header against [`SIGNATURES`].
///
/// # Example
///
/// ```rust
/// use chatreplay::attachment::detect_signature;
///
/// let sig = detect_signature(b"%PDF-1.7\n").unwrap();
/// assert_eq!(sig.extension, ".pdf");
/// assert!(detect_signature(b"PK\x03\x04").is_none());
/// ```
pub fn detect_signature(header: &[u8]) -> Option<&'static Signature> {
    let header = &header[..header.len().min(SIGNATURE_LEN)];
    let hex = hex::encode_upper(header);
    SIGNATURES.iter().find(|sig| hex.starts_with(sig.magic))
}

/// Builds the name a sniffed file is renamed to.
///
/// A stray trailing dot or space is dropped before the extension is added.
pub fn sniffed_name(file_name: &str, extension: &str) -> String {
    format!("{}{}", file_name.trim_end_matches(['.', ' ']), extension)
}

/// Reads the header of `path` and optionally renames it on a match.
///
/// A failed rename is logged and reported as `renamed_to: None`; the
/// detection itself still counts.
pub fn sniff_file(path: &Path, rename: bool) -> io::Result<Option<Sniffed>> {
    let mut header = Vec::with_capacity(SIGNATURE_LEN);
    File::open(path)?
        .take(SIGNATURE_LEN as u64)
        .read_to_end(&mut header)?;

    let Some(signature) = detect_signature(&header) else {
        return Ok(None);
    };

    let mut renamed_to = None;
    if rename {
        if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
            let new_name = sniffed_name(file_name, signature.extension);
            if new_name != file_name {
                match fs::rename(path, path.with_file_name(&new_name)) {
                    Ok(()) => {
                        info!(from = file_name, to = %new_name, "renamed sniffed attachment");
                        renamed_to = Some(new_name);
                    }
                    Err(err) => warn!(file_name, error = %err, "could not rename sniffed attachment"),
                }
            }
        }
    }

    Ok(Some(Sniffed {
        extension: signature.extension,
        renamed_to,
    }))
}
