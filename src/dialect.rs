//! # Text Dialect Reference
//!
//! This module documents the exact dialect the crate's scanners implement.
//! It contains no code; it exists so the behavior of [`crate::split`],
//! [`crate::parse_csv`], and the numeric conversions is written down in one
//! place.
//!
//! ## Delimiters and Escapes
//!
//! A delimiter set is an ordinary `&str`; *any* of its characters ends a
//! token. One configurable escape character (default `\`) shields the
//! single character that follows it from delimiter matching:
//!
//! ```text
//! input:      a\,b,c      delimiters: ","
//! tokens:     a\,b | c
//! ```
//!
//! The escape is *not* consumed: tokens are views of the input, so `a\,b`
//! keeps its backslash. An escape as the final character of the input
//! shields nothing and stays in the last token. Two escapes in a row mean
//! the first shields the second, so a delimiter after `\\` still splits.
//!
//! ## Empty Tokens and the Trailing Stretch
//!
//! With `include_empty` off (the default), adjacent delimiters produce no
//! token. With it on, each run of `n` adjacent delimiters produces `n - 1`
//! empty tokens. The stretch after the final delimiter is asymmetric in
//! both modes: it becomes a token only when it is non-empty. Consequences:
//!
//! | input   | default        | with empty tokens |
//! |---------|----------------|-------------------|
//! | `a,b`   | `a`, `b`       | `a`, `b`          |
//! | `a,b,`  | `a`, `b`       | `a`, `b`          |
//! | `a,,b`  | `a`, `b`       | `a`, ``, `b`      |
//! | `,a`    | `a`            | ``, `a`           |
//! | `,,,`   | *(none)*       | ``, ``, ``        |
//! | *empty* | *(none)*       | *(none)*          |
//!
//! Token indices number the tokens actually reported, starting at zero.
//!
//! ## Cursor Protocol
//!
//! The cursor-based tokenizer leaves the cursor just past the delimiter it
//! consumed, or at `len + 1` once the input is exhausted. Any cursor value
//! `>= len` reads as exhausted and returns `""` without moving, so a loop
//! may call past the end harmlessly. A cursor that does not fall on a
//! character boundary is also treated as exhausted rather than panicking.
//!
//! ## CSV Cells
//!
//! The CSV scanner implements the RFC 4180 quoting conventions with the
//! permissive extensions most spreadsheet exports need:
//!
//! - `,` separates cells; `\r`, `\n`, and NUL terminate records.
//! - Consecutive terminators (CRLF, blank lines) close a single record.
//! - `"` opens a quoted section in which separators and terminators are
//!   literal text. `""` inside a quoted section is one literal quote.
//! - Quoted sections may start mid-cell; the surrounding text joins into
//!   one cell (`pre"mid"post` is the cell `premidpost`).
//! - An unterminated quote absorbs the rest of the input into its cell.
//! - A record's trailing cell is reported only when non-empty; the final
//!   record is closed even without a trailing line break.
//!
//! ## Numeric Text
//!
//! Numbers render with ASCII digits and `.` as the decimal separator,
//! independent of locale. Decimal integers render as `itoa` produces them.
//! Hex renders lowercase without a prefix; negative values render as `-`
//! plus the magnitude so that hex output always parses back. Floats render
//! either as a bare integer (when the value has no fractional part) or at
//! fixed precision (6 digits for `f32`, 8 for `f64`) with trailing zeros
//! stripped, which can leave a bare trailing point:
//!
//! ```text
//! 3.0f64  -> "3"        2.5f64   -> "2.5"
//! 0.1f64  -> "0.1"      1e-9f64  -> "0."
//! ```
//!
//! Parsing is the mirror image but strict: one complete number, no
//! surrounding whitespace, no `0x` prefix, no trailing garbage.
