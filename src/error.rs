//! Error types for numeric text conversion.
//!
//! The scanning and splitting entry points in this crate are total over their
//! inputs and report nothing; only the numeric conversions in [`crate::num`]
//! can fail. Those failures come in exactly two shapes:
//!
//! - [`Error::BufferTooSmall`]: a formatted value did not fit in the output
//!   buffer the caller supplied.
//! - [`Error::InvalidNumber`]: a piece of text was not a complete, valid
//!   rendering of the requested numeric type.
//!
//! ## Examples
//!
//! ```
//! use strutil::{from_text, to_text, Error};
//!
//! let mut buf = [0u8; 2];
//! match to_text(123456i32, &mut buf) {
//!     Err(Error::BufferTooSmall { capacity }) => assert_eq!(capacity, 2),
//!     other => panic!("unexpected: {other:?}"),
//! }
//!
//! assert!(from_text::<i32>("12 apples").is_err());
//! ```

use thiserror::Error;

/// Errors that can occur while converting between numbers and text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The output buffer is too small to hold the formatted value.
    ///
    /// `capacity` is the size of the buffer that was supplied. The buffer
    /// contents are unspecified after a failed write; nothing is returned
    /// partially formatted.
    #[error("formatted value does not fit in a {capacity}-byte buffer")]
    BufferTooSmall {
        /// Size in bytes of the buffer the caller supplied.
        capacity: usize,
    },

    /// The input text is not a valid rendering of the target type.
    ///
    /// Parsing is strict: the entire input must be consumed, so trailing
    /// garbage, surrounding whitespace, and radix prefixes such as `0x` all
    /// land here, as do values that overflow the target type.
    #[error("cannot parse {input:?} as {target}")]
    InvalidNumber {
        /// The text that failed to parse.
        input: String,
        /// Name of the numeric type that was requested.
        target: &'static str,
    },
}

impl Error {
    /// Creates a buffer-capacity error.
    pub(crate) fn buffer_too_small(capacity: usize) -> Self {
        Error::BufferTooSmall { capacity }
    }

    /// Creates a malformed-number error for the given target type.
    pub(crate) fn invalid_number(input: &str, target: &'static str) -> Self {
        Error::InvalidNumber {
            input: input.to_string(),
            target,
        }
    }
}

/// A specialized `Result` type for numeric conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
