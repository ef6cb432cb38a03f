pub(crate) mod hex;

pub use self::hex::error::HexError;
pub use self::hex::{HexDump, decode_hex_digits, parse_hex_text};

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed hex input: {0}")]
    MalformedHex(#[from] HexError),
}

/// Read an annotated hex capture from disk.
pub fn read_hex_file(path: &Path) -> Result<HexDump, SourceError> {
    let text = fs::read_to_string(path)?;
    let dump = parse_hex_text(&text)?;
    debug!(path = %path.display(), bytes = dump.len(), "loaded hex capture");
    Ok(dump)
}
