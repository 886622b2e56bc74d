//! Text-level transcript parsing.
//!
//! - [`reassemble`] folds wrapped lines back into logical messages
//! - [`split_stamp`] and [`split_sender`] take a logical message apart
//!
//! Neither step touches the file system; attachment handling lives in
//! [`crate::attachment`].

pub mod reassemble;
pub mod split;

pub use reassemble::{DATE_FORMAT, is_message_start, parse_date, reassemble};
pub use split::{Stamp, StampError, bounded_split, split_sender, split_stamp};
