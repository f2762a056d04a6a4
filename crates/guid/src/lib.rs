//! Structured GUID values with constant-evaluable text and byte codecs
//!
//! A [`Guid`] is a 128-bit identifier stored in the structured decomposition
//! used by its string form: one `u32`, two `u16`, and eight bytes. All
//! comparison, hashing, parsing, and formatting operate on the fields, so
//! their results are identical on little- and big-endian hosts. Only the
//! byte codec deals in byte order, and it does so explicitly:
//!
//! - Variant-1 ([`Guid::to_bytes`]/[`Guid::from_bytes`]): the first three
//!   fields big-endian. This is the wire form assumed by libuuid and
//!   boost-uuid, which do not inspect the variant bits either.
//! - Variant-2 ([`Guid::to_bytes_le`]/[`Guid::from_bytes_le`]): the first
//!   three fields little-endian. This matches the in-memory layout of a
//!   structured value on a little-endian machine, and exists for components
//!   that historically blitted that layout to storage.
//!
//! Neither codec reads the variant nibble in byte 8; choosing between them
//! is the caller's policy.
//!
//! The text codec is `const fn` end to end: [`guid!`] parses embedded
//! literals at build time (a malformed literal fails the build) and
//! [`Guid::parse`] handles user input at run time with a positioned error.
//!
//! # Example
//!
//! ```
//! use guid::{guid, Guid};
//!
//! // Compile-time literal
//! const FOLDER: Guid = guid!("{00112233-4455-6677-8899-aabbccddeeff}");
//!
//! // Runtime parse, canonical formatting
//! let parsed: Guid = "00112233-4455-6677-8899-AABBCCDDEEFF".parse().unwrap();
//! assert_eq!(parsed, FOLDER);
//! assert_eq!(parsed.to_string(), "{00112233-4455-6677-8899-aabbccddeeff}");
//!
//! // Variant-1 wire bytes vs. Variant-2 legacy blit
//! assert_eq!(FOLDER.to_bytes()[..4], [0x00, 0x11, 0x22, 0x33]);
//! assert_eq!(FOLDER.to_bytes_le()[..4], [0x33, 0x22, 0x11, 0x00]);
//! ```

mod codec;
mod format;
mod generate;
mod guid;
mod hash;
mod parse;

pub use format::{FormattedGuid, FormattedGuidUtf16};
pub use guid::Guid;
pub use parse::{GuidParseError, GuidParseErrorKind};
