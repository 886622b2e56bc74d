//! Splitting a logical message into stamp, sender and body.
//!
//! Only the first occurrence of each delimiter is structural: message bodies
//! routinely contain `" - "` and `": "` themselves.

use chrono::NaiveDate;
use thiserror::Error;

use super::reassemble::parse_date;

/// Separates the `date, time` stamp from the rest of the message.
pub const STAMP_DELIMITER: &str = " - ";

/// Separates the date from the time inside the stamp.
pub const DATE_TIME_DELIMITER: &str = ", ";

/// Separates the sender name from the body.
pub const SENDER_DELIMITER: &str = ": ";

/// Splits `text` on `delimiter` into at most `n` parts.
///
/// Everything from the `n`-th piece on stays joined in the last part,
/// delimiters included. `n == 0` behaves like `n == 1`.
///
/// # Example
///
/// ```rust
/// use chatreplay::parsing::bounded_split;
///
/// let parts = bounded_split("Bob: time: 10: 30", ": ", 2);
/// assert_eq!(parts, vec!["Bob", "time: 10: 30"]);
/// ```
pub fn bounded_split<'a>(text: &'a str, delimiter: &str, n: usize) -> Vec<&'a str> {
    text.splitn(n.max(1), delimiter).collect()
}

/// Reasons a logical message has no usable stamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StampError {
    /// No `" - "` between stamp and content
    #[error("missing ' - ' after the timestamp")]
    MissingSeparator,
    /// No `", "` between date and time
    #[error("missing time in timestamp '{0}'")]
    MissingTime(String),
    /// Date token is not `MM/DD/YY`
    #[error("invalid date '{0}', expected MM/DD/YY")]
    InvalidDate(String),
}

/// The leading stamp of a logical message plus everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp<'a> {
    /// Parsed message date
    pub date: NaiveDate,
    /// Opaque time of day
    pub time: &'a str,
    /// Sender and body, or the system notice
    pub rest: &'a str,
}

/// Splits `"date, time - rest"` into its three parts.
///
/// # Example
///
/// ```rust
/// use chatreplay::parsing::split_stamp;
///
/// let stamp = split_stamp("1/2/23, 10:00 AM - Alice: a - b").unwrap();
/// assert_eq!(stamp.time, "10:00 AM");
/// assert_eq!(stamp.rest, "Alice: a - b");
/// ```
pub fn split_stamp(message: &str) -> Result<Stamp<'_>, StampError> {
    let parts = bounded_split(message, STAMP_DELIMITER, 2);
    let [stamp, rest] = parts[..] else {
        return Err(StampError::MissingSeparator);
    };

    let (date, time) = stamp
        .split_once(DATE_TIME_DELIMITER)
        .ok_or_else(|| StampError::MissingTime(stamp.to_string()))?;
    let date = parse_date(date).ok_or_else(|| StampError::InvalidDate(date.to_string()))?;

    Ok(Stamp { date, time, rest })
}

/// Splits `"Sender: body"` into sender and body.
///
/// Returns `None` for system notices, which carry no `": "` separator.
pub fn split_sender(rest: &str) -> Option<(&str, &str)> {
    if !rest.contains(':') {
        return None;
    }
    match bounded_split(rest, SENDER_DELIMITER, 2)[..] {
        [sender, body] => Some((sender, body)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_split_rejoins_overflow() {
        assert_eq!(bounded_split("a - b - c - d", " - ", 2), vec!["a", "b - c - d"]);
        assert_eq!(bounded_split("a - b - c - d", " - ", 3), vec!["a", "b", "c - d"]);
        assert_eq!(bounded_split("a - b", " - ", 5), vec!["a", "b"]);
        assert_eq!(bounded_split("plain", " - ", 2), vec!["plain"]);
        assert_eq!(bounded_split("a - b", " - ", 0), vec!["a - b"]);
    }

    #[test]
    fn test_split_stamp() {
        let stamp = split_stamp("12/31/22, 11:59 PM - Bob: Happy new year - almost").unwrap();
        assert_eq!(stamp.date, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
        assert_eq!(stamp.time, "11:59 PM");
        assert_eq!(stamp.rest, "Bob: Happy new year - almost");
    }

    #[test]
    fn test_split_stamp_errors() {
        assert_eq!(
            split_stamp("1/2/23, 10:00 AM Alice: Hi"),
            Err(StampError::MissingSeparator)
        );
        assert_eq!(
            split_stamp("1/2/23 - Alice: Hi"),
            Err(StampError::MissingTime("1/2/23".into()))
        );
        assert_eq!(
            split_stamp("31/2/23, 10:00 - Alice: Hi"),
            Err(StampError::InvalidDate("31/2/23".into()))
        );
    }

    #[test]
    fn test_split_sender() {
        assert_eq!(split_sender("Alice: Hello"), Some(("Alice", "Hello")));
        assert_eq!(
            split_sender("Alice: note: bring snacks"),
            Some(("Alice", "note: bring snacks"))
        );
        assert_eq!(split_sender("Bob joined using this group's invite link"), None);
        assert_eq!(split_sender("Alice changed the time to 10:30"), None);
    }
}
