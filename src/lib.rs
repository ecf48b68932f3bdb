//! # strutil
//!
//! Small, allocation-conscious text utilities: cutset trimming,
//! escape-aware splitting, resumable tokenization, CSV cell extraction,
//! and locale-independent numeric conversion into caller-supplied buffers.
//!
//! Everything operates on borrowed string views. Trimming and splitting
//! return subslices of the input, the tokenizer keeps its position in a
//! caller-owned cursor, and numeric formatting writes into a `&mut [u8]`
//! scratch buffer instead of allocating a `String`.
//!
//! ## Key Features
//!
//! - **Zero-copy trimming** against a configurable cutset ([`trim`],
//!   [`trim_with`], and the one-sided variants)
//! - **Escape-aware splitting** on a set of delimiter characters, with
//!   optional empty tokens ([`split`], [`split_with_options`])
//! - **Resumable tokenization** driven by a caller-owned cursor
//!   ([`next_token`]) or an iterator ([`tokens`])
//! - **CSV cell extraction** with RFC 4180-style quoting, doubled-quote
//!   escapes, and CRLF/blank-line coalescing ([`parse_csv`],
//!   [`parse_csv_with_records`])
//! - **Buffer-bounded numeric conversion** with fixed rendering rules and
//!   strict parsing, decimal and hex ([`to_text`], [`from_text`],
//!   [`to_text_hex`], [`from_text_hex`])
//!
//! ## Quick Start
//!
//! Splitting and tokenizing:
//!
//! ```
//! use strutil::{next_token, split, trim};
//!
//! let mut fields = Vec::new();
//! split("cache = on ; depth = 3", ";", |field, _| fields.push(trim(field)));
//! assert_eq!(fields, ["cache = on", "depth = 3"]);
//!
//! let mut cursor = 0;
//! assert_eq!(next_token("usr/local/bin", &mut cursor, "/"), "usr");
//! assert_eq!(next_token("usr/local/bin", &mut cursor, "/"), "local");
//! ```
//!
//! CSV cells and numbers:
//!
//! ```
//! use strutil::{from_text, parse_csv, to_text};
//!
//! let mut total = 0i64;
//! parse_csv("10,20,30\n", |cell, _| {
//!     total += from_text(cell).unwrap_or(0);
//! });
//! assert_eq!(total, 60);
//!
//! let mut buf = [0u8; 20];
//! assert_eq!(to_text(total, &mut buf).unwrap(), "60");
//! ```
//!
//! ## Views and Buffers
//!
//! The splitting entry points hand out `&str` views that borrow from the
//! input, so nothing is copied and escape characters stay in place. The
//! CSV parser is the one exception: quote removal forces it to assemble
//! cells in a transient buffer, which is reused between callback calls.
//!
//! Numeric formatting borrows the written prefix of the caller's buffer.
//! A 20-byte buffer covers every 64-bit integer; 128-bit integers need up
//! to 40 bytes. Undersized buffers fail with [`Error::BufferTooSmall`],
//! never with a truncated rendering.
//!
//! The exact dialect (escape semantics, empty-token rules, CSV quoting,
//! numeric grammar) is written down in [`dialect`].

pub mod csv;
pub mod dialect;
pub mod error;
pub mod num;
pub mod options;
pub mod split;
pub mod trim;

pub use csv::{parse_csv, parse_csv_with_records};
pub use error::{Error, Result};
pub use num::{from_text, from_text_hex, to_text, to_text_hex, FromText, HexText, ToText};
pub use options::SplitOptions;
pub use split::{
    next_token, next_token_with_options, split, split_with_options, tokens, tokens_with_options,
    Tokens,
};
pub use trim::{
    trim, trim_end, trim_end_with, trim_start, trim_start_with, trim_with, DEFAULT_CUTSET,
};
