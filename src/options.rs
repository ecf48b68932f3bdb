//! Configuration options for splitting and tokenization.
//!
//! This module provides [`SplitOptions`], which controls how [`crate::split`]
//! and the cursor-based tokenizer treat empty tokens and escape characters:
//!
//! - `include_empty`: report empty tokens between adjacent delimiters
//! - `escape`: the character that shields the next character from matching
//!
//! ## Examples
//!
//! ```rust
//! use strutil::{split_with_options, SplitOptions};
//!
//! let mut tokens = Vec::new();
//! let options = SplitOptions::new().with_empty_tokens(true);
//! split_with_options("a,,b", ",", options, |token, _| tokens.push(token.to_string()));
//! assert_eq!(tokens, ["a", "", "b"]);
//!
//! // Use '^' instead of backslash as the escape character
//! let options = SplitOptions::new().with_escape('^');
//! let mut tokens = Vec::new();
//! split_with_options("a^,b,c", ",", options, |token, _| tokens.push(token.to_string()));
//! assert_eq!(tokens, ["a^,b", "c"]);
//! ```

/// Options controlling delimiter scanning.
///
/// The escape character protects the character that follows it from being
/// treated as a delimiter. It is not removed from the tokens that are
/// produced; callers that want unescaping must do it themselves.
///
/// # Examples
///
/// ```rust
/// use strutil::SplitOptions;
///
/// // Defaults: drop empty tokens, backslash escape
/// let options = SplitOptions::new();
///
/// // Custom configuration
/// let options = SplitOptions::new()
///     .with_empty_tokens(true)
///     .with_escape('^');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Report empty tokens between adjacent delimiters (default: `false`).
    pub include_empty: bool,
    /// Character that shields the next character from delimiter matching
    /// (default: `'\\'`).
    pub escape: char,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            include_empty: false,
            escape: '\\',
        }
    }
}

impl SplitOptions {
    /// Creates options with default settings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strutil::SplitOptions;
    ///
    /// let options = SplitOptions::new();
    /// assert!(!options.include_empty);
    /// assert_eq!(options.escape, '\\');
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether empty tokens between adjacent delimiters are reported.
    ///
    /// The stretch after the final delimiter is unaffected: it becomes a
    /// token only when non-empty, in either mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strutil::SplitOptions;
    ///
    /// let options = SplitOptions::new().with_empty_tokens(true);
    /// assert!(options.include_empty);
    /// ```
    #[must_use]
    pub fn with_empty_tokens(mut self, include_empty: bool) -> Self {
        self.include_empty = include_empty;
        self
    }

    /// Sets the escape character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strutil::SplitOptions;
    ///
    /// let options = SplitOptions::new().with_escape('^');
    /// assert_eq!(options.escape, '^');
    /// ```
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }
}
