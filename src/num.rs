//! Locale-independent numeric conversion into caller-supplied buffers.
//!
//! [`to_text`] and [`to_text_hex`] format a number into a `&mut [u8]`
//! scratch buffer and return the written prefix as `&str`, so formatting
//! never allocates. [`from_text`] and [`from_text_hex`] parse the other
//! way. Rendering and parsing always use `.` as the decimal separator and
//! ASCII digits, independent of any process locale.
//!
//! ## Rendering rules
//!
//! - Integers render in plain decimal, hex without any `0x` prefix.
//!   Negative hex values carry a leading `-` before the magnitude, so they
//!   parse back with [`from_text_hex`].
//! - Floats with no fractional part render without a decimal point
//!   (`3.0` becomes `"3"`). Otherwise the value is rendered with fixed
//!   precision (6 fractional digits for `f32`, 8 for `f64`) and trailing
//!   zeros are stripped: `2.5f64` becomes `"2.5"`, not `"2.50000000"`.
//!   Values whose digits round away entirely keep the bare point:
//!   `1e-9f64` renders as `"0."`.
//!
//! ## Parsing rules
//!
//! Parsing is strict: the whole input must be one valid number. Leading or
//! trailing whitespace, trailing garbage, and `0x`/`0X` prefixes are all
//! rejected. Hex parsing accepts the digits `0-9a-fA-F` with an optional
//! leading sign.
//!
//! ## Buffer sizing
//!
//! A 20-byte buffer covers any 64-bit integer in decimal; 128-bit values
//! need up to 40 bytes. When the buffer is too small the conversion fails
//! with [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) and the
//! buffer contents are unspecified.
//!
//! ## Examples
//!
//! ```
//! let mut buf = [0u8; 20];
//! assert_eq!(strutil::to_text(-42i32, &mut buf).unwrap(), "-42");
//! assert_eq!(strutil::to_text(2.5f64, &mut buf).unwrap(), "2.5");
//! assert_eq!(strutil::to_text_hex(255u8, &mut buf).unwrap(), "ff");
//! assert_eq!(strutil::from_text::<i32>("-42").unwrap(), -42);
//! ```

use std::fmt::{self, Write as _};

use crate::error::{Error, Result};
use crate::trim::trim_end_with;

/// Characters stripped from the tail of a fixed-precision rendering.
const FLOAT_TRIM_CUTSET: &str = "0\0";

/// Formats `value` into `buffer` and returns the written prefix.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) when the
/// rendered text does not fit.
///
/// # Examples
///
/// ```
/// let mut buf = [0u8; 20];
/// assert_eq!(strutil::to_text(1999u16, &mut buf).unwrap(), "1999");
/// assert_eq!(strutil::to_text(10.0f32, &mut buf).unwrap(), "10");
/// assert!(strutil::to_text(123456i32, &mut [0u8; 4]).is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_text<T: ToText>(value: T, buffer: &mut [u8]) -> Result<&str> {
    value.write_text(buffer)
}

/// Formats an integer into `buffer` as lowercase hex, without a `0x` prefix.
///
/// Negative values render as `-` followed by the magnitude in hex, so the
/// output round-trips through [`from_text_hex`].
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) when the
/// rendered text does not fit.
///
/// # Examples
///
/// ```
/// let mut buf = [0u8; 32];
/// assert_eq!(strutil::to_text_hex(48879u32, &mut buf).unwrap(), "beef");
/// assert_eq!(strutil::to_text_hex(-123i32, &mut buf).unwrap(), "-7b");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_text_hex<T: HexText>(value: T, buffer: &mut [u8]) -> Result<&str> {
    value.write_hex(buffer)
}

/// Parses `text` as a decimal rendering of `T`.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`](crate::Error::InvalidNumber) when the
/// text is empty, contains anything besides one complete number, or
/// overflows `T`.
///
/// # Examples
///
/// ```
/// assert_eq!(strutil::from_text::<i64>("-7").unwrap(), -7);
/// assert_eq!(strutil::from_text::<f64>("2.5").unwrap(), 2.5);
/// assert!(strutil::from_text::<u8>("300").is_err());
/// assert!(strutil::from_text::<i32>(" 7").is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_text<T: FromText>(text: &str) -> Result<T> {
    T::parse_text(text)
}

/// Parses `text` as a hex rendering of an integer, without a `0x` prefix.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`](crate::Error::InvalidNumber) when the
/// text is not pure hex digits (with an optional leading sign) or
/// overflows `T`.
///
/// # Examples
///
/// ```
/// assert_eq!(strutil::from_text_hex::<u32>("beef").unwrap(), 48879);
/// assert_eq!(strutil::from_text_hex::<i32>("-7b").unwrap(), -123);
/// assert!(strutil::from_text_hex::<u32>("0xbeef").is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_text_hex<T: HexText>(text: &str) -> Result<T> {
    T::parse_hex(text)
}

/// Numbers that can be rendered into a byte buffer.
///
/// Implemented for the primitive integers and floats. Most callers go
/// through [`to_text`] rather than using this trait directly.
pub trait ToText: Copy {
    /// Writes `self` into `buffer` and returns the written prefix.
    fn write_text(self, buffer: &mut [u8]) -> Result<&str>;
}

/// Numbers that can be parsed from their decimal text rendering.
pub trait FromText: Sized {
    /// Parses `text` as a complete rendering of `Self`.
    fn parse_text(text: &str) -> Result<Self>;
}

/// Integers that additionally convert through unprefixed hex text.
pub trait HexText: ToText + FromText {
    /// Writes `self` into `buffer` as lowercase hex.
    fn write_hex(self, buffer: &mut [u8]) -> Result<&str>;
    /// Parses `text` as unprefixed hex.
    fn parse_hex(text: &str) -> Result<Self>;
}

/// A `fmt::Write` sink over a byte slice that refuses partial writes.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        SliceWriter { buf, len: 0 }
    }
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let Some(dst) = self.buf.get_mut(self.len..self.len + s.len()) else {
            return Err(fmt::Error);
        };
        dst.copy_from_slice(s.as_bytes());
        self.len += s.len();
        Ok(())
    }
}

/// Runs `emit` against a fresh sink over `buffer` and returns the written
/// prefix, mapping a refused write to `BufferTooSmall`.
fn write_with<'b>(
    buffer: &'b mut [u8],
    emit: impl FnOnce(&mut SliceWriter<'_>) -> fmt::Result,
) -> Result<&'b str> {
    let capacity = buffer.len();
    let len = {
        let mut sink = SliceWriter::new(buffer);
        emit(&mut sink).map_err(|_| Error::buffer_too_small(capacity))?;
        sink.len
    };
    // The sink only accepts whole `&str` fragments, so the prefix is UTF-8.
    Ok(std::str::from_utf8(&buffer[..len]).expect("sink wrote valid UTF-8"))
}

macro_rules! impl_integer_text {
    ($($t:ty)*) => {$(
        impl ToText for $t {
            fn write_text(self, buffer: &mut [u8]) -> Result<&str> {
                let mut scratch = itoa::Buffer::new();
                let digits = scratch.format(self);
                write_with(buffer, |sink| sink.write_str(digits))
            }
        }

        impl FromText for $t {
            fn parse_text(text: &str) -> Result<Self> {
                text.parse()
                    .map_err(|_| Error::invalid_number(text, stringify!($t)))
            }
        }
    )*};
}

macro_rules! impl_hex_text_unsigned {
    ($($t:ty)*) => {$(
        impl HexText for $t {
            fn write_hex(self, buffer: &mut [u8]) -> Result<&str> {
                write_with(buffer, |sink| write!(sink, "{:x}", self))
            }

            fn parse_hex(text: &str) -> Result<Self> {
                <$t>::from_str_radix(text, 16)
                    .map_err(|_| Error::invalid_number(text, stringify!($t)))
            }
        }
    )*};
}

macro_rules! impl_hex_text_signed {
    ($($t:ty)*) => {$(
        impl HexText for $t {
            fn write_hex(self, buffer: &mut [u8]) -> Result<&str> {
                // Sign-magnitude, not two's complement, so the rendering
                // parses back via `from_str_radix`.
                write_with(buffer, |sink| {
                    if self < 0 {
                        write!(sink, "-{:x}", self.unsigned_abs())
                    } else {
                        write!(sink, "{:x}", self)
                    }
                })
            }

            fn parse_hex(text: &str) -> Result<Self> {
                <$t>::from_str_radix(text, 16)
                    .map_err(|_| Error::invalid_number(text, stringify!($t)))
            }
        }
    )*};
}

macro_rules! impl_float_text {
    ($t:ty, $precision:expr) => {
        impl ToText for $t {
            fn write_text(self, buffer: &mut [u8]) -> Result<&str> {
                if self.trunc() == self {
                    // Integral (infinities included): no decimal point.
                    // NaN fails this comparison but renders as "NaN" below.
                    return write_with(buffer, |sink| write!(sink, "{:.0}", self));
                }
                let text =
                    write_with(buffer, |sink| write!(sink, "{:.p$}", self, p = $precision))?;
                Ok(trim_end_with(text, FLOAT_TRIM_CUTSET))
            }
        }

        impl FromText for $t {
            fn parse_text(text: &str) -> Result<Self> {
                text.parse()
                    .map_err(|_| Error::invalid_number(text, stringify!($t)))
            }
        }
    };
}

impl_integer_text!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
impl_hex_text_signed!(i8 i16 i32 i64 i128 isize);
impl_hex_text_unsigned!(u8 u16 u32 u64 u128 usize);
impl_float_text!(f32, 6);
impl_float_text!(f64, 8);
