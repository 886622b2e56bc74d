//! Line reassembly.
//!
//! A WhatsApp export writes embedded newlines verbatim, so one message can
//! span several raw lines. Only the first of them starts with a
//! `MM/DD/YY, ` stamp; every following line is a continuation and gets
//! folded back into the message it belongs to.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ChatError, Result};

/// The only supported date layout (two-digit year).
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Parses a `MM/DD/YY` date token strictly.
///
/// # Example
///
/// ```rust
/// use chatreplay::parsing::parse_date;
///
/// assert!(parse_date("1/2/23").is_some());
/// assert!(parse_date("13/2/23").is_none());
/// assert!(parse_date("1/2/2023").is_none());
/// assert!(parse_date(" 1/2/23").is_none());
/// ```
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    // chrono skips whitespace before numeric fields
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit() || b == b'/') {
        return None;
    }
    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}

/// Returns `true` if `line` opens a new message.
///
/// The line must contain `", "` and the token before it must be a valid
/// date. A bare date on its own line is a continuation.
pub fn is_message_start(line: &str) -> bool {
    line.split_once(", ")
        .is_some_and(|(date, _)| parse_date(date).is_some())
}

/// Folds continuation lines into the message that precedes them.
///
/// Continuations are joined with a single space. Output order matches input
/// order, and running this on its own output changes nothing.
///
/// # Errors
///
/// Returns [`ChatError::TamperedInput`] if the first line is a continuation:
/// a genuine export always starts with a stamped message.
///
/// # Example
///
/// ```rust
/// use chatreplay::parsing::reassemble;
///
/// let merged = reassemble(["1/2/23, 10:00 AM - Alice: Hello", "world"])?;
/// assert_eq!(merged, vec!["1/2/23, 10:00 AM - Alice: Hello world"]);
/// # Ok::<(), chatreplay::ChatError>(())
/// ```
pub fn reassemble<I, S>(lines: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut messages: Vec<String> = Vec::new();
    let mut continuations = 0usize;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        if is_message_start(line) {
            messages.push(line.to_string());
            continue;
        }

        let Some(current) = messages.last_mut() else {
            return Err(ChatError::tampered(
                index + 1,
                "first line is not the start of a message",
            ));
        };
        current.push(' ');
        current.push_str(line);
        continuations += 1;
    }

    debug!(
        messages = messages.len(),
        continuations, "reassembled transcript lines"
    );
    Ok(messages)
}
