//! Structural marker vocabulary.
//!
//! These are the characters the grammar reacts to rather than consumes as literal text: the comment marker, the
//! assignment operator, the quote, the space and the newline.
//!
//! ## Notes
//! - Matching is exact; there are no aliases (tab is not a space, `\r` is not a newline).
//! - None of the markers is a permitted literal symbol (see [`crate::lang::symbols`]).

/// `#`: starts a comment that runs to the end of the line.
pub const COMMENT: char = '#';
/// The single space character. Other whitespace is not a space.
pub const SPACE: char = ' ';
/// Line terminator. End of input terminates a line as well.
pub const NEWLINE: char = '\n';
/// Opens and closes a quoted value.
pub const QUOTE: char = '"';
/// Assignment operator between key and value.
pub const ASSIGN: char = '=';
