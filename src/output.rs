//! Minimal formatted output engine.
//!
//! A `printf` subset that writes byte by byte through a [`Transport`],
//! plus the 64-bit integer to text converters it is built on. No heap,
//! no `core::fmt` machinery on the output path.
//!
//! Supported conversions: `%s`, `%c`, `%u`, `%d`/`%i`, `%x`/`%X`.

use crate::config::MAX_PRINT_SIZE;
use crate::transport::Transport;

/// Minimum scratch size accepted by the converters (20 digits + sign).
pub const MIN_NUM_BUF_LEN: usize = 21;

/// Scratch buffer for one numeric conversion.
pub type NumBuf = [u8; MAX_PRINT_SIZE];

/// Integer conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// E20: Scratch buffer shorter than the longest possible result
    BufferTooSmall,
    /// E21: Base outside 2..=16
    InvalidBase,
}

impl ConvertError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::BufferTooSmall => "E20",
            Self::InvalidBase => "E21",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::BufferTooSmall => "buffer too small",
            Self::InvalidBase => "invalid base",
        }
    }
}

impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// One `printf` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Text for `%s`.
    Str(&'a str),
    /// Raw bytes for `%s`, written unchanged (command arguments).
    Bytes(&'a [u8]),
    /// Raw byte for `%c`.
    Char(u8),
    /// Unsigned integer for `%u`, `%x`.
    Unsigned(u64),
    /// Signed integer for `%d`, `%i`.
    Signed(i64),
}

impl<'a> Arg<'a> {
    fn as_unsigned(self) -> Option<u64> {
        match self {
            Arg::Unsigned(v) => Some(v),
            Arg::Signed(v) => Some(v as u64),
            Arg::Char(c) => Some(u64::from(c)),
            Arg::Str(_) | Arg::Bytes(_) => None,
        }
    }

    fn as_signed(self) -> Option<i64> {
        match self {
            Arg::Signed(v) => Some(v),
            Arg::Unsigned(v) => Some(v as i64),
            Arg::Char(c) => Some(i64::from(c)),
            Arg::Str(_) | Arg::Bytes(_) => None,
        }
    }

    fn as_byte(self) -> Option<u8> {
        match self {
            Arg::Char(c) => Some(c),
            Arg::Unsigned(v) => Some(v as u8),
            Arg::Signed(v) => Some(v as u8),
            Arg::Str(_) | Arg::Bytes(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(b: &'a [u8]) -> Self {
        Arg::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a heapless::Vec<u8, N>> for Arg<'a> {
    fn from(b: &'a heapless::Vec<u8, N>) -> Self {
        Arg::Bytes(b.as_slice())
    }
}

impl<'a, const N: usize> From<&'a heapless::String<N>> for Arg<'a> {
    fn from(s: &'a heapless::String<N>) -> Self {
        Arg::Str(s.as_str())
    }
}

impl From<char> for Arg<'_> {
    /// Characters above U+00FF are not representable and become `?`.
    fn from(c: char) -> Self {
        Arg::Char(u8::try_from(c).unwrap_or(b'?'))
    }
}

macro_rules! impl_arg_from {
    ($variant:ident: $wide:ty => $($t:ty),+) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(v: $t) -> Self {
                    Arg::$variant(v as $wide)
                }
            }
        )+
    };
}

impl_arg_from!(Unsigned: u64 => u8, u16, u32, u64, usize);
impl_arg_from!(Signed: i64 => i8, i16, i32, i64, isize);

/// Convert an unsigned 64-bit value to text in `base`.
///
/// Writes the digits (lowercase) to the start of `buf` and returns their
/// count. `buf` must hold at least [`MIN_NUM_BUF_LEN`] bytes.
pub fn u64_to_str(num: u64, buf: &mut [u8], base: u8) -> Result<usize, ConvertError> {
    check_args(buf, base)?;

    if num == 0 {
        buf[0] = b'0';
        return Ok(1);
    }

    let len = write_digits_reversed(num, buf, 0, base)?;
    buf[..len].reverse();
    Ok(len)
}

/// Convert a signed 64-bit value to text in `base`.
///
/// Negative values get a leading `-` in base 10; in other bases they are
/// printed as their two's complement bit pattern.
pub fn i64_to_str(num: i64, buf: &mut [u8], base: u8) -> Result<usize, ConvertError> {
    check_args(buf, base)?;

    if num >= 0 || base != 10 {
        return u64_to_str(num as u64, buf, base);
    }

    let mut len = write_digits_reversed(num.unsigned_abs(), buf, 0, base)?;
    if len >= buf.len() {
        return Err(ConvertError::BufferTooSmall);
    }
    buf[len] = b'-';
    len += 1;
    buf[..len].reverse();
    Ok(len)
}

fn check_args(buf: &[u8], base: u8) -> Result<(), ConvertError> {
    if buf.len() < MIN_NUM_BUF_LEN {
        return Err(ConvertError::BufferTooSmall);
    }
    if !(2..=16).contains(&base) {
        return Err(ConvertError::InvalidBase);
    }
    Ok(())
}

/// Least significant digit first.
fn write_digits_reversed(mut num: u64, buf: &mut [u8], start: usize, base: u8) -> Result<usize, ConvertError> {
    let base = u64::from(base);
    let mut i = start;

    while num != 0 {
        if i >= buf.len() {
            return Err(ConvertError::BufferTooSmall);
        }
        let digit = (num % base) as u8;
        buf[i] = if digit > 9 { b'a' + digit - 10 } else { b'0' + digit };
        num /= base;
        i += 1;
    }

    Ok(i)
}

/// Print `fmt` with `args` through `out`.
///
/// - Unsupported conversions consume `%` and the character, print nothing
///   and take no argument.
/// - A missing or mismatched argument prints nothing for that conversion.
/// - A trailing lone `%` ends output.
/// - Hex output gets one leading `0` when its digit count is odd.
pub fn printf<T: Transport + ?Sized>(out: &mut T, fmt: &str, args: &[Arg<'_>]) {
    let mut scratch: NumBuf = [0u8; MAX_PRINT_SIZE];
    let mut args = args.iter().copied();
    let mut bytes = fmt.bytes();

    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.write_byte(b);
            continue;
        }

        let Some(conv) = bytes.next() else {
            break;
        };

        match conv {
            b's' => match args.next() {
                Some(Arg::Str(s)) => out.write_str(s),
                Some(Arg::Bytes(b)) => out.write_bytes(b),
                _ => {}
            },
            b'c' => {
                if let Some(c) = args.next().and_then(Arg::as_byte) {
                    out.write_byte(c);
                }
            }
            b'u' => {
                if let Some(v) = args.next().and_then(Arg::as_unsigned) {
                    if let Ok(len) = u64_to_str(v, &mut scratch, 10) {
                        out.write_bytes(&scratch[..len]);
                    }
                }
            }
            b'd' | b'i' => {
                if let Some(v) = args.next().and_then(Arg::as_signed) {
                    if let Ok(len) = i64_to_str(v, &mut scratch, 10) {
                        out.write_bytes(&scratch[..len]);
                    }
                }
            }
            b'x' | b'X' => {
                if let Some(v) = args.next().and_then(Arg::as_unsigned) {
                    if let Ok(len) = u64_to_str(v, &mut scratch, 16) {
                        if len % 2 != 0 {
                            out.write_byte(b'0');
                        }
                        out.write_bytes(&scratch[..len]);
                    }
                }
            }
            _ => {}
        }
    }
}

/// `printf` with inline arguments.
///
/// Each argument is converted with `Arg::from`.
///
/// ```ignore
/// cli_printf!(ctx, "LED (pin %u), %s\n", 13u8, "ON");
/// ```
#[macro_export]
macro_rules! cli_printf {
    ($out:expr, $fmt:expr $(,)?) => {
        $crate::output::printf($out, $fmt, &[])
    };
    ($out:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::output::printf($out, $fmt, &[$($crate::output::Arg::from($arg)),+])
    };
}
