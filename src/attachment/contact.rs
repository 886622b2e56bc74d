//! Contact card (vCard) resolution.
//!
//! A shared contact shows up in the transcript as `Name.vcf (file attached)`.
//! The card itself sits next to the transcript and is reduced to
//! `"Name|Phone"` for display.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::AttachmentSource;

/// Body of a contact message whose card could not be resolved.
pub const UNRESOLVED_CONTACT: &str = "|";

/// Number of leading characters replaced by the local trunk `0`.
const COUNTRY_PREFIX_LEN: usize = 3;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FN:(.+)").expect("valid FN pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TEL;type=.*?:\+?([\d\s]+)").expect("valid TEL pattern"));

/// Display name and local-format phone number from a contact card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Formatted name (`FN`)
    pub name: String,
    /// Phone number in local format
    pub phone: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.name, self.phone)
    }
}

/// Converts an international number into local format.
///
/// Whitespace is removed, the first three characters (country code) are
/// dropped and a `0` is prepended. Numbers of three characters or fewer are
/// returned without the prefix swap.
///
/// # Example
///
/// ```rust
/// use chatreplay::attachment::normalize_phone;
///
/// assert_eq!(normalize_phone("234 80 1234 5678\n"), "08012345678");
/// assert_eq!(normalize_phone("112"), "112");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.chars().count() <= COUNTRY_PREFIX_LEN {
        return digits;
    }
    let local: String = digits.chars().skip(COUNTRY_PREFIX_LEN).collect();
    format!("0{local}")
}

/// Extracts the first `FN` and `TEL;type=…` entries of a vCard.
///
/// Returns `None` unless both are present.
pub fn parse_vcard(text: &str) -> Option<Contact> {
    let name = NAME_PATTERN.captures(text)?.get(1)?.as_str().trim_end();
    let phone = PHONE_PATTERN.captures(text)?.get(1)?.as_str();

    Some(Contact {
        name: name.to_string(),
        phone: normalize_phone(phone),
    })
}

/// Resolves a contact card file into `"Name|Phone"`.
///
/// Degrades to [`UNRESOLVED_CONTACT`] when the file is missing or holds no
/// name/phone pair; the parse as a whole carries on.
pub fn resolve_contact(file_name: &str, source: &dyn AttachmentSource) -> String {
    let Some(text) = source.read_text(file_name) else {
        return UNRESOLVED_CONTACT.to_string();
    };

    match parse_vcard(&text) {
        Some(contact) => contact.to_string(),
        None => {
            warn!(file_name, "contact card has no name/phone pair");
            UNRESOLVED_CONTACT.to_string()
        }
    }
}
