//! Annotated hex text decoding.
//!
//! Captures are written as hex digits with optional `#` comments and
//! arbitrary whitespace. The reader strips both; the parser turns the
//! remaining digits into bytes and rejects odd-length or non-hex residue.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{HexDump, decode_hex_digits, parse_hex_text};
