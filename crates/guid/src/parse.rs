//! Textual GUID parsing.
//!
//! Accepted form: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, optionally wrapped
//! in braces, hex digits in either case. The whole parser is `const fn`, so
//! the same code checks embedded literals at build time (via [`guid!`]) and
//! user input at run time.

use std::fmt;

use thiserror::Error;

use crate::Guid;

/// Failure classes for textual GUID parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidParseErrorKind {
    /// Something other than `0-9a-fA-F` where a hex digit was required.
    InvalidHexDigit,
    /// A missing `-` at one of the four separator positions.
    ExpectedSeparator,
    /// An opening `{` without its matching `}`.
    ExpectedClosingBrace,
    /// The input ended before the form was complete.
    UnexpectedEnd,
    /// Characters left over after a complete GUID.
    TrailingCharacters,
}

impl GuidParseErrorKind {
    /// Human-readable description of the failure class.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidHexDigit => "invalid hexadecimal character",
            Self::ExpectedSeparator => "expected `-` separator",
            Self::ExpectedClosingBrace => "expected closing `}`",
            Self::UnexpectedEnd => "unexpected end of input",
            Self::TrailingCharacters => "unexpected trailing characters",
        }
    }
}

impl fmt::Display for GuidParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A positioned GUID parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct GuidParseError {
    /// What went wrong.
    pub kind: GuidParseErrorKind,
    /// Code-unit index at which parsing failed.
    pub offset: usize,
}

impl GuidParseError {
    /// Human-readable description of the failure class.
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Unwraps a `Result` in a `const fn`, where `?` is unavailable.
macro_rules! tri {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(e) => return Err(e),
        }
    };
}

// One parser body instantiated per code-unit width, the same way for byte
// and UTF-16 input. All comparisons go through `as $unit` casts of ASCII
// byte literals, so a non-ASCII wide unit simply fails as a mismatch at its
// position.
macro_rules! parser_impl {
    ($name:ident, $unit:ty) => {
        mod $name {
            use super::{Guid, GuidParseError, GuidParseErrorKind};

            const fn hex_digit(units: &[$unit], i: usize) -> Result<u8, GuidParseError> {
                if i >= units.len() {
                    return Err(GuidParseError {
                        kind: GuidParseErrorKind::UnexpectedEnd,
                        offset: i,
                    });
                }
                let c = units[i];
                if c >= b'0' as $unit && c <= b'9' as $unit {
                    Ok((c - b'0' as $unit) as u8)
                } else if c >= b'a' as $unit && c <= b'f' as $unit {
                    Ok((c - b'a' as $unit) as u8 + 10)
                } else if c >= b'A' as $unit && c <= b'F' as $unit {
                    Ok((c - b'A' as $unit) as u8 + 10)
                } else {
                    Err(GuidParseError {
                        kind: GuidParseErrorKind::InvalidHexDigit,
                        offset: i,
                    })
                }
            }

            const fn expect(
                units: &[$unit],
                i: usize,
                want: u8,
                kind: GuidParseErrorKind,
            ) -> Result<usize, GuidParseError> {
                if i >= units.len() {
                    return Err(GuidParseError {
                        kind: GuidParseErrorKind::UnexpectedEnd,
                        offset: i,
                    });
                }
                if units[i] != want as $unit {
                    return Err(GuidParseError { kind, offset: i });
                }
                Ok(i + 1)
            }

            const fn hex_u8(units: &[$unit], i: usize) -> Result<u8, GuidParseError> {
                let hi = tri!(hex_digit(units, i));
                let lo = tri!(hex_digit(units, i + 1));
                Ok((hi << 4) | lo)
            }

            const fn hex_u16(units: &[$unit], i: usize) -> Result<u16, GuidParseError> {
                let hi = tri!(hex_u8(units, i));
                let lo = tri!(hex_u8(units, i + 2));
                Ok(((hi as u16) << 8) | lo as u16)
            }

            const fn hex_u32(units: &[$unit], i: usize) -> Result<u32, GuidParseError> {
                let hi = tri!(hex_u16(units, i));
                let lo = tri!(hex_u16(units, i + 4));
                Ok(((hi as u32) << 16) | lo as u32)
            }

            pub(crate) const fn parse(units: &[$unit]) -> Result<Guid, GuidParseError> {
                let braced = !units.is_empty() && units[0] == b'{' as $unit;
                let mut i = if braced { 1 } else { 0 };

                let data1 = tri!(hex_u32(units, i));
                i += 8;
                i = tri!(expect(units, i, b'-', GuidParseErrorKind::ExpectedSeparator));
                let data2 = tri!(hex_u16(units, i));
                i += 4;
                i = tri!(expect(units, i, b'-', GuidParseErrorKind::ExpectedSeparator));
                let data3 = tri!(hex_u16(units, i));
                i += 4;
                i = tri!(expect(units, i, b'-', GuidParseErrorKind::ExpectedSeparator));

                let mut data4 = [0u8; 8];
                data4[0] = tri!(hex_u8(units, i));
                i += 2;
                data4[1] = tri!(hex_u8(units, i));
                i += 2;
                i = tri!(expect(units, i, b'-', GuidParseErrorKind::ExpectedSeparator));
                let mut k = 2;
                while k < 8 {
                    data4[k] = tri!(hex_u8(units, i));
                    i += 2;
                    k += 1;
                }

                if braced {
                    i = tri!(expect(
                        units,
                        i,
                        b'}',
                        GuidParseErrorKind::ExpectedClosingBrace
                    ));
                }
                if i != units.len() {
                    return Err(GuidParseError {
                        kind: GuidParseErrorKind::TrailingCharacters,
                        offset: i,
                    });
                }

                Ok(Guid::from_fields(data1, data2, data3, data4))
            }
        }
    };
}

parser_impl!(narrow, u8);
parser_impl!(wide, u16);

impl Guid {
    /// Parses the canonical string form, with or without braces.
    ///
    /// Usable in const contexts; [`guid!`] wraps this for literals.
    pub const fn parse(text: &str) -> Result<Guid, GuidParseError> {
        narrow::parse(text.as_bytes())
    }

    /// [`Guid::parse`] over UTF-16 code units, for wide-string hosts.
    pub const fn parse_utf16(units: &[u16]) -> Result<Guid, GuidParseError> {
        wide::parse(units)
    }
}

impl std::str::FromStr for Guid {
    type Err = GuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guid::parse(s)
    }
}

/// Parses a GUID literal at compile time.
///
/// ```
/// use guid::{guid, Guid};
///
/// const FRAME_SOURCE: Guid = guid!("{bf48a340-7f33-48a9-8a05-7bd36a4b8a9c}");
/// assert_eq!(FRAME_SOURCE.data2, 0x7f33);
/// ```
///
/// A malformed literal fails the build with the failure class spelled out:
///
/// ```compile_fail
/// use guid::guid;
///
/// let _ = guid!("{bf48a340-7f33-48a9-8a05-7bd36a4b8a9g}");
/// ```
#[macro_export]
macro_rules! guid {
    ($text:expr) => {{
        const PARSED: $crate::Guid = match $crate::Guid::parse($text) {
            Ok(parsed) => parsed,
            Err(e) => match e.kind {
                $crate::GuidParseErrorKind::InvalidHexDigit => {
                    panic!("invalid GUID literal: invalid hexadecimal character")
                }
                $crate::GuidParseErrorKind::ExpectedSeparator => {
                    panic!("invalid GUID literal: expected `-` separator")
                }
                $crate::GuidParseErrorKind::ExpectedClosingBrace => {
                    panic!("invalid GUID literal: missing closing brace")
                }
                $crate::GuidParseErrorKind::UnexpectedEnd => {
                    panic!("invalid GUID literal: unexpected end of input")
                }
                $crate::GuidParseErrorKind::TrailingCharacters => {
                    panic!("invalid GUID literal: unexpected trailing characters")
                }
            },
        };
        PARSED
    }};
}
