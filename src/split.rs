//! Escape-aware splitting and resumable tokenization.
//!
//! All entry points scan for *any character* of a delimiter set, honoring an
//! escape character that shields whatever follows it from delimiter
//! matching. Tokens are borrowed subslices of the input; escape characters
//! are left inside them untouched.
//!
//! Two consumption styles are offered:
//!
//! - **Whole-input**: [`split`] walks the entire input and hands every token
//!   to a callback together with its running index.
//! - **Cursor-based**: [`next_token`] extracts one token per call and
//!   advances a caller-owned cursor, so several inputs can be tokenized in
//!   lockstep or a scan can stop early. [`tokens`] wraps the same machinery
//!   in an [`Iterator`].
//!
//! ## Empty tokens
//!
//! By default, empty tokens between adjacent delimiters are dropped; enable
//! [`SplitOptions::with_empty_tokens`] to keep them. The stretch after the
//! final delimiter is special either way: it is reported only when it is
//! non-empty, so `"a,b,"` yields the same tokens as `"a,b"`.
//!
//! ## Examples
//!
//! ```
//! let mut tokens = Vec::new();
//! strutil::split(r"one,two\,half,three", ",", |token, _| tokens.push(token));
//! assert_eq!(tokens, ["one", r"two\,half", "three"]);
//! ```

use crate::options::SplitOptions;

/// Scans forward from `from` for the first unescaped delimiter character.
///
/// Returns the byte offset where the token ends and, if a delimiter was
/// found, the offset just past it. `from` must lie on a char boundary.
fn next_boundary(
    input: &str,
    from: usize,
    delimiters: &str,
    escape: char,
) -> (usize, Option<usize>) {
    let mut escaped = false;
    for (i, ch) in input[from..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == escape {
            escaped = true;
            continue;
        }
        if delimiters.contains(ch) {
            let at = from + i;
            return (at, Some(at + ch.len_utf8()));
        }
    }
    (input.len(), None)
}

/// Splits `input` at every unescaped occurrence of a `delimiters` character,
/// invoking `on_token` with each token and its index.
///
/// Equivalent to [`split_with_options`] with [`SplitOptions::default`]:
/// empty tokens are dropped and `\` is the escape character.
///
/// # Examples
///
/// ```
/// let mut parts = Vec::new();
/// strutil::split("alpha,,beta;gamma", ",;", |token, index| {
///     parts.push((index, token));
/// });
/// assert_eq!(parts, [(0, "alpha"), (1, "beta"), (2, "gamma")]);
/// ```
pub fn split<'a, F>(input: &'a str, delimiters: &str, on_token: F)
where
    F: FnMut(&'a str, u32),
{
    split_with_options(input, delimiters, SplitOptions::default(), on_token);
}

/// Splits `input` according to `options`, invoking `on_token` with each
/// token and its index.
///
/// Token indices count *reported* tokens, so with empty tokens dropped the
/// indices stay consecutive. An empty delimiter set produces no tokens at
/// all. The final stretch after the last delimiter is reported only when it
/// is non-empty, regardless of `options.include_empty`.
///
/// Tokens are subslices of `input`, so the callback may collect them and
/// use them after the call returns.
///
/// # Examples
///
/// ```
/// use strutil::SplitOptions;
///
/// let mut parts = Vec::new();
/// let options = SplitOptions::new().with_empty_tokens(true);
/// strutil::split_with_options("a,,b,", ",", options, |token, _| parts.push(token));
/// assert_eq!(parts, ["a", "", "b"]);
/// ```
pub fn split_with_options<'a, F>(
    input: &'a str,
    delimiters: &str,
    options: SplitOptions,
    mut on_token: F,
) where
    F: FnMut(&'a str, u32),
{
    if delimiters.is_empty() {
        return;
    }
    let mut begin = 0;
    let mut index: u32 = 0;
    loop {
        let (end, resume) = next_boundary(input, begin, delimiters, options.escape);
        let token = &input[begin..end];
        let Some(next) = resume else {
            if !token.is_empty() {
                on_token(token, index);
            }
            return;
        };
        if options.include_empty || !token.is_empty() {
            on_token(token, index);
            index += 1;
        }
        begin = next;
    }
}

/// Extracts the next token from `input`, resuming at `*cursor`.
///
/// Equivalent to [`next_token_with_options`] with [`SplitOptions::default`].
///
/// # Examples
///
/// ```
/// let mut cursor = 0;
/// assert_eq!(strutil::next_token("a,b,c", &mut cursor, ","), "a");
/// assert_eq!(strutil::next_token("a,b,c", &mut cursor, ","), "b");
/// assert_eq!(strutil::next_token("a,b,c", &mut cursor, ","), "c");
/// assert_eq!(strutil::next_token("a,b,c", &mut cursor, ","), "");
/// ```
#[must_use]
pub fn next_token<'a>(input: &'a str, cursor: &mut usize, delimiters: &str) -> &'a str {
    next_token_with_options(input, cursor, delimiters, SplitOptions::default())
}

/// Extracts the next token from `input` according to `options`, resuming at
/// `*cursor` and advancing it past the consumed delimiter.
///
/// The cursor starts at `0` and is owned by the caller, so independent
/// cursors can walk several inputs in lockstep. Consuming the trailing
/// stretch parks the cursor at `input.len() + 1`; a trailing delimiter
/// instead leaves it at `input.len()`. Either way the cursor then reads
/// as exhausted, so further calls keep returning `""`.
///
/// Returns `""` without touching the cursor when the delimiter set is
/// empty, when the cursor is already past the end, or when it does not lie
/// on a character boundary. With empty tokens dropped, runs of adjacent
/// delimiters are skipped in a single call.
///
/// # Examples
///
/// ```
/// use strutil::SplitOptions;
///
/// let options = SplitOptions::new().with_empty_tokens(true);
/// let mut cursor = 0;
/// assert_eq!(strutil::next_token_with_options("a,,b", &mut cursor, ",", options), "a");
/// assert_eq!(strutil::next_token_with_options("a,,b", &mut cursor, ",", options), "");
/// assert_eq!(strutil::next_token_with_options("a,,b", &mut cursor, ",", options), "b");
/// assert!(cursor > "a,,b".len());
/// ```
#[must_use]
pub fn next_token_with_options<'a>(
    input: &'a str,
    cursor: &mut usize,
    delimiters: &str,
    options: SplitOptions,
) -> &'a str {
    if delimiters.is_empty() || *cursor >= input.len() || !input.is_char_boundary(*cursor) {
        return "";
    }
    let mut begin = *cursor;
    loop {
        let (end, resume) = next_boundary(input, begin, delimiters, options.escape);
        let token = &input[begin..end];
        match resume {
            Some(next) => {
                *cursor = next;
                if options.include_empty || !token.is_empty() {
                    return token;
                }
                begin = next;
            }
            None => {
                // Park the cursor past the end so the next call is a no-op
                // even when this final token is empty.
                *cursor = input.len() + 1;
                return token;
            }
        }
    }
}

/// Returns an iterator over the tokens of `input`, using default options.
///
/// # Examples
///
/// ```
/// let tokens: Vec<&str> = strutil::tokens("one two  three", " ").collect();
/// assert_eq!(tokens, ["one", "two", "three"]);
/// ```
pub fn tokens<'a>(input: &'a str, delimiters: &'a str) -> Tokens<'a> {
    tokens_with_options(input, delimiters, SplitOptions::default())
}

/// Returns an iterator over the tokens of `input` according to `options`.
pub fn tokens_with_options<'a>(
    input: &'a str,
    delimiters: &'a str,
    options: SplitOptions,
) -> Tokens<'a> {
    Tokens {
        input,
        delimiters,
        options,
        cursor: 0,
    }
}

/// Iterator over the tokens of an input string.
///
/// Created by [`tokens`] or [`tokens_with_options`]. Yields exactly the
/// tokens the callback-based [`split_with_options`] would report, in the
/// same order.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    delimiters: &'a str,
    options: SplitOptions,
    cursor: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.delimiters.is_empty() || self.cursor >= self.input.len() {
            return None;
        }
        let token =
            next_token_with_options(self.input, &mut self.cursor, self.delimiters, self.options);
        if token.is_empty() && self.cursor > self.input.len() {
            // The trailing stretch was empty; it is never a token.
            return None;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str, delimiters: &str, options: SplitOptions) -> Vec<(String, u32)> {
        let mut out = Vec::new();
        split_with_options(input, delimiters, options, |token, index| {
            out.push((token.to_string(), index));
        });
        out
    }

    fn parts(input: &str, delimiters: &str, options: SplitOptions) -> Vec<String> {
        collect(input, delimiters, options)
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(
            parts("a,b,c", ",", SplitOptions::default()),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_split_multiple_delimiters() {
        assert_eq!(
            parts("a,b;c d", ",; ", SplitOptions::default()),
            ["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_split_drops_empty_tokens_by_default() {
        assert_eq!(parts(",,a,,b,,", ",", SplitOptions::default()), ["a", "b"]);
        assert!(parts(",,,", ",", SplitOptions::default()).is_empty());
    }

    #[test]
    fn test_split_keeps_empty_tokens_on_request() {
        let options = SplitOptions::new().with_empty_tokens(true);
        assert_eq!(parts("a,,b", ",", options), ["a", "", "b"]);
    }

    #[test]
    fn test_split_trailing_stretch_only_when_nonempty() {
        let options = SplitOptions::new().with_empty_tokens(true);
        // "a,b," and "a,b" produce the same tokens.
        assert_eq!(parts("a,b,", ",", options), ["a", "b"]);
        assert_eq!(parts("a,b", ",", options), ["a", "b"]);
        // A leading delimiter still yields a leading empty token.
        assert_eq!(parts(",a", ",", options), ["", "a"]);
    }

    #[test]
    fn test_split_indices_count_reported_tokens() {
        assert_eq!(
            collect("a,,b", ",", SplitOptions::default()),
            [("a".to_string(), 0), ("b".to_string(), 1)]
        );
        let options = SplitOptions::new().with_empty_tokens(true);
        assert_eq!(
            collect("a,,b", ",", options),
            [
                ("a".to_string(), 0),
                ("".to_string(), 1),
                ("b".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_split_escape_shields_delimiter() {
        assert_eq!(
            parts(r"a\,b,c", ",", SplitOptions::default()),
            [r"a\,b", "c"]
        );
    }

    #[test]
    fn test_split_escaped_escape_does_not_shield() {
        // The first backslash escapes the second; the comma still splits.
        assert_eq!(
            parts(r"a\\,b", ",", SplitOptions::default()),
            [r"a\\", "b"]
        );
    }

    #[test]
    fn test_split_custom_escape() {
        let options = SplitOptions::new().with_escape('^');
        assert_eq!(parts("a^,b,c", ",", options), ["a^,b", "c"]);
        // With '^' as the escape, a backslash is an ordinary character.
        assert_eq!(parts(r"a\,b", ",", options), [r"a\", "b"]);
    }

    #[test]
    fn test_split_escape_at_end_of_input() {
        assert_eq!(parts("a\\", ",", SplitOptions::default()), ["a\\"]);
    }

    #[test]
    fn test_split_empty_input_and_empty_delimiters() {
        assert!(parts("", ",", SplitOptions::default()).is_empty());
        assert!(parts("a,b", "", SplitOptions::default()).is_empty());
        let options = SplitOptions::new().with_empty_tokens(true);
        assert!(parts("", ",", options).is_empty());
    }

    #[test]
    fn test_split_no_delimiter_present() {
        assert_eq!(parts("abc", ",", SplitOptions::default()), ["abc"]);
    }

    #[test]
    fn test_split_multibyte_delimiter_and_content() {
        assert_eq!(
            parts("кот→пёс→ёж", "→", SplitOptions::default()),
            ["кот", "пёс", "ёж"]
        );
    }

    #[test]
    fn test_split_tokens_are_views_into_input() {
        let input = "a,b";
        let mut views = Vec::new();
        split(input, ",", |token, _| views.push(token));
        let offset = views[1].as_ptr() as usize - input.as_ptr() as usize;
        assert_eq!(offset, 2);
    }

    #[test]
    fn test_split_tokens_survive_the_callback() {
        // Tokens borrow from the input, not from the callback scope, so a
        // caller may collect them and read them after the call returns.
        let input = String::from("first,second,third");
        let mut kept: Vec<&str> = Vec::new();
        split_with_options(&input, ",", SplitOptions::default(), |token, _| {
            kept.push(token);
        });
        assert_eq!(kept, ["first", "second", "third"]);
    }

    #[test]
    fn test_next_token_walks_input() {
        let input = "a,b,,c";
        let mut cursor = 0;
        assert_eq!(next_token(input, &mut cursor, ","), "a");
        assert_eq!(next_token(input, &mut cursor, ","), "b");
        assert_eq!(next_token(input, &mut cursor, ","), "c");
        assert_eq!(next_token(input, &mut cursor, ","), "");
        assert_eq!(next_token(input, &mut cursor, ","), "");
    }

    #[test]
    fn test_next_token_cursor_positions() {
        let input = "ab,cd";
        let mut cursor = 0;
        assert_eq!(next_token(input, &mut cursor, ","), "ab");
        assert_eq!(cursor, 3);
        assert_eq!(next_token(input, &mut cursor, ","), "cd");
        assert_eq!(cursor, input.len() + 1);
    }

    #[test]
    fn test_next_token_skips_empty_without_extra_calls() {
        let input = ",,x";
        let mut cursor = 0;
        assert_eq!(next_token(input, &mut cursor, ","), "x");
        assert_eq!(cursor, input.len() + 1);
    }

    #[test]
    fn test_next_token_reports_empty_when_requested() {
        let options = SplitOptions::new().with_empty_tokens(true);
        let input = ",x";
        let mut cursor = 0;
        assert_eq!(next_token_with_options(input, &mut cursor, ",", options), "");
        assert_eq!(cursor, 1);
        assert_eq!(next_token_with_options(input, &mut cursor, ",", options), "x");
    }

    #[test]
    fn test_next_token_trailing_delimiter_leaves_cursor_at_len() {
        let input = "a,";
        let mut cursor = 0;
        assert_eq!(next_token(input, &mut cursor, ","), "a");
        // Consuming "a" lands the cursor at the length, which reads as
        // exhausted: the next call returns "" without moving it.
        assert_eq!(cursor, 2);
        assert_eq!(next_token(input, &mut cursor, ","), "");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_next_token_guards_leave_cursor_untouched() {
        let mut cursor = 0;
        assert_eq!(next_token("abc", &mut cursor, ""), "");
        assert_eq!(cursor, 0);

        let mut cursor = 99;
        assert_eq!(next_token("abc", &mut cursor, ","), "");
        assert_eq!(cursor, 99);

        // Offset 1 lands inside the two-byte encoding of 'é'.
        let mut cursor = 1;
        assert_eq!(next_token("és", &mut cursor, ","), "");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_next_token_outlives_delimiter_set() {
        // The returned token borrows only from the input, so it stays
        // usable after a short-lived delimiter string is dropped.
        let input = "key=value";
        let mut cursor = 0;
        let token = {
            let delimiters = String::from("=");
            next_token(input, &mut cursor, &delimiters)
        };
        assert_eq!(token, "key");
    }

    #[test]
    fn test_next_token_independent_cursors() {
        let left = "1,2,3";
        let right = "one,two,three";
        let mut lc = 0;
        let mut rc = 0;
        let mut pairs = Vec::new();
        loop {
            let l = next_token(left, &mut lc, ",");
            let r = next_token(right, &mut rc, ",");
            if l.is_empty() && r.is_empty() {
                break;
            }
            pairs.push((l, r));
        }
        assert_eq!(pairs, [("1", "one"), ("2", "two"), ("3", "three")]);
    }

    #[test]
    fn test_tokens_iterator_matches_split() {
        for input in ["a,b,c", ",,a,,b,,", "", "abc", "a\\,b,c", ",,,"] {
            for include_empty in [false, true] {
                let options = SplitOptions::new().with_empty_tokens(include_empty);
                let from_iter: Vec<String> = tokens_with_options(input, ",", options)
                    .map(str::to_string)
                    .collect();
                assert_eq!(
                    from_iter,
                    parts(input, ",", options),
                    "input {input:?}, include_empty {include_empty}"
                );
            }
        }
    }

    #[test]
    fn test_tokens_iterator_is_fused() {
        let mut iter = tokens("a", ",");
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_tokens_empty_delimiters_yields_nothing() {
        assert_eq!(tokens("abc", "").count(), 0);
    }
}
