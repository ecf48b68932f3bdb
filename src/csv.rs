//! CSV cell extraction with RFC 4180-style quoting.
//!
//! [`parse_csv`] walks a comma-separated document and reports every cell to
//! a callback together with its column index. [`parse_csv_with_records`]
//! additionally reports record boundaries. The parser is forgiving rather
//! than validating: any input produces *some* cells, and malformed quoting
//! is absorbed instead of rejected.
//!
//! ## Dialect
//!
//! - Cells are separated by `,`. A quoted cell may contain commas, line
//!   breaks, and doubled quotes (`""` produces one literal `"`).
//! - Records end at `\r`, `\n`, or an embedded NUL; a run of consecutive
//!   terminators (such as `\r\n` or blank lines) closes a single record.
//! - A trailing empty cell at the end of a record is not reported, so
//!   `"a,b\n"` and `"a,b,\n"` produce the same cells.
//! - The final record is closed whether or not the input ends with a line
//!   break.
//!
//! Quote removal means cells cannot always be borrowed from the input, so
//! unlike [`crate::split`] the callback sees a transient buffer that is
//! reused between cells.
//!
//! ## Examples
//!
//! ```
//! let mut cells = Vec::new();
//! strutil::parse_csv("a,b,\"c,d\"\n", |cell, index| {
//!     cells.push((index, cell.to_string()));
//! });
//! assert_eq!(cells.len(), 3);
//! assert_eq!(cells[2], (2, "c,d".to_string()));
//! ```

/// Parses `input` as CSV, invoking `on_cell` with each cell's text and its
/// zero-based column index.
///
/// Record boundaries still reset the column index but are not otherwise
/// reported; use [`parse_csv_with_records`] to observe them.
///
/// # Examples
///
/// ```
/// let mut cells = Vec::new();
/// strutil::parse_csv("name,qty\nbolt,7\n", |cell, index| {
///     cells.push((index, cell.to_string()));
/// });
/// assert_eq!(
///     cells,
///     [
///         (0, "name".to_string()),
///         (1, "qty".to_string()),
///         (0, "bolt".to_string()),
///         (1, "7".to_string()),
///     ]
/// );
/// ```
pub fn parse_csv<F>(input: &str, on_cell: F)
where
    F: FnMut(&str, u32),
{
    parse_cells(input, on_cell, || {});
}

/// Parses `input` as CSV, reporting both cells and record boundaries.
///
/// `on_record_end` fires once per record, after that record's last cell. It
/// always fires at least once: even an empty input closes one (empty)
/// record.
///
/// The two callbacks are separate `FnMut` values, so state they both need
/// (such as a row under construction) belongs in a shared-interior type
/// like [`std::cell::Cell`].
///
/// # Examples
///
/// ```
/// let mut cells = Vec::new();
/// let mut records = 0;
/// strutil::parse_csv_with_records(
///     "a,b\r\nc,d\r\n",
///     |cell, _| cells.push(cell.to_string()),
///     || records += 1,
/// );
/// assert_eq!(cells, ["a", "b", "c", "d"]);
/// assert_eq!(records, 2);
/// ```
pub fn parse_csv_with_records<C, R>(input: &str, on_cell: C, on_record_end: R)
where
    C: FnMut(&str, u32),
    R: FnMut(),
{
    parse_cells(input, on_cell, on_record_end);
}

fn parse_cells<C, R>(input: &str, mut on_cell: C, mut on_record_end: R)
where
    C: FnMut(&str, u32),
    R: FnMut(),
{
    let mut cell = String::new();
    let mut index: u32 = 0;
    // Inside a quoted section.
    let mut quoted = false;
    // The previous character closed a quoted section; a quote now means a
    // doubled (escaped) quote.
    let mut prev_quote = false;
    // The previous character terminated a record; further terminators are
    // coalesced into the same record break.
    let mut prev_terminator = false;

    for ch in input.chars() {
        if quoted {
            if ch == '"' {
                quoted = false;
                prev_quote = true;
            } else {
                cell.push(ch);
            }
            continue;
        }
        match ch {
            '"' => {
                if prev_quote {
                    prev_quote = false;
                    cell.push('"');
                }
                quoted = true;
            }
            ',' => {
                on_cell(cell.as_str(), index);
                cell.clear();
                index += 1;
            }
            '\0' | '\n' | '\r' => {
                if !cell.is_empty() {
                    on_cell(cell.as_str(), index);
                    cell.clear();
                }
                if !prev_terminator {
                    on_record_end();
                }
                index = 0;
            }
            _ => cell.push(ch),
        }
        prev_quote = ch == '"' && prev_quote;
        prev_terminator = matches!(ch, '\0' | '\n' | '\r');
    }

    if !cell.is_empty() {
        on_cell(cell.as_str(), index);
    }
    if !prev_terminator {
        on_record_end();
    }
}
