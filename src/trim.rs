//! Cutset-based trimming over borrowed string views.
//!
//! Every function here returns a subslice of its input; nothing is copied
//! and nothing allocates. Trimming is driven by a *cutset*, a string whose
//! characters (not whose sequence) are stripped from the ends of the input.
//! The default cutset is [`DEFAULT_CUTSET`]: tab, line feed, carriage
//! return, and space.
//!
//! Only characters literally present in the cutset are removed. There is no
//! Unicode whitespace classification, so `U+00A0` (no-break space) survives
//! the default trim.
//!
//! ## Examples
//!
//! ```
//! use strutil::{trim, trim_end_with};
//!
//! assert_eq!(trim("\t config line \r\n"), "config line");
//! assert_eq!(trim_end_with("1.250000", "0"), "1.25");
//! ```

/// Characters removed by the default trim: tab, line feed, carriage return,
/// and space.
pub const DEFAULT_CUTSET: &str = "\t\n\r ";

/// Removes leading and trailing [`DEFAULT_CUTSET`] characters.
///
/// # Examples
///
/// ```
/// assert_eq!(strutil::trim("  hello \t"), "hello");
/// assert_eq!(strutil::trim("\r\n"), "");
/// ```
#[must_use]
pub fn trim(input: &str) -> &str {
    trim_with(input, DEFAULT_CUTSET)
}

/// Removes leading [`DEFAULT_CUTSET`] characters.
#[must_use]
pub fn trim_start(input: &str) -> &str {
    trim_start_with(input, DEFAULT_CUTSET)
}

/// Removes trailing [`DEFAULT_CUTSET`] characters.
#[must_use]
pub fn trim_end(input: &str) -> &str {
    trim_end_with(input, DEFAULT_CUTSET)
}

/// Removes leading and trailing characters that appear in `cutset`.
///
/// An empty cutset leaves the input untouched. Characters in the interior
/// of the input are never removed.
///
/// # Examples
///
/// ```
/// assert_eq!(strutil::trim_with("00,12,00", "0"), ",12,");
/// assert_eq!(strutil::trim_with("--a-b--", "-"), "a-b");
/// ```
#[must_use]
pub fn trim_with<'a>(input: &'a str, cutset: &str) -> &'a str {
    trim_end_with(trim_start_with(input, cutset), cutset)
}

/// Removes leading characters that appear in `cutset`.
#[must_use]
pub fn trim_start_with<'a>(input: &'a str, cutset: &str) -> &'a str {
    input.trim_start_matches(|c| cutset.contains(c))
}

/// Removes trailing characters that appear in `cutset`.
#[must_use]
pub fn trim_end_with<'a>(input: &'a str, cutset: &str) -> &'a str {
    input.trim_end_matches(|c| cutset.contains(c))
}
