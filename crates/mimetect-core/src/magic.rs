//! Magic byte patterns: fixed byte sequences expected at fixed offsets.

use serde::Deserialize;

use crate::error::{MimeError, Result};

/// How a magic literal from the dataset is decoded into bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum MagicKind {
    /// Paired hexadecimal digits, two per byte, most-significant nibble
    /// first. Case-insensitive.
    #[serde(rename = "byte")]
    Byte,
    /// The literal's UTF-8 bytes, taken verbatim.
    #[default]
    #[serde(rename = "string", alias = "text")]
    Text,
}

/// A fixed byte sequence expected at a fixed offset in a document prefix.
///
/// Patterns are positive evidence only: a match identifies the owning type,
/// a non-match says nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicPattern {
    offset: usize,
    bytes: Vec<u8>,
}

impl MagicPattern {
    /// Decode `literal` according to `kind` and build a pattern anchored at
    /// `offset`. Callers are expected to pass a non-empty literal; an empty
    /// one would produce a pattern that matches everything.
    pub fn new(offset: usize, kind: MagicKind, literal: &str) -> Result<Self> {
        let bytes = match kind {
            MagicKind::Byte => decode_hex(literal)?,
            MagicKind::Text => literal.as_bytes().to_vec(),
        };
        Ok(Self { offset, bytes })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of leading bytes a buffer needs for this pattern to be
    /// evaluated at all: `offset + bytes.len()`.
    pub fn required_len(&self) -> usize {
        self.offset + self.bytes.len()
    }

    /// True iff `data` is long enough and carries exactly this pattern's
    /// bytes at `[offset, offset + len)`. A buffer too short for the
    /// pattern is a non-match, not an error.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.is_empty() {
            return false;
        }
        let end = self.required_len();
        if end > data.len() {
            return false;
        }
        data[self.offset..end] == self.bytes[..]
    }
}

/// Decode a case-insensitive hex digit string, two digits per byte.
fn decode_hex(literal: &str) -> Result<Vec<u8>> {
    if literal.len() % 2 != 0 {
        return Err(MimeError::InvalidMagicLiteral {
            literal: literal.to_string(),
            detail: "odd number of hex digits".to_string(),
        });
    }
    let mut bytes = Vec::with_capacity(literal.len() / 2);
    for pair in literal.as_bytes().chunks_exact(2) {
        match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(hi), Some(lo)) => bytes.push((hi << 4) | lo),
            _ => {
                return Err(MimeError::InvalidMagicLiteral {
                    literal: literal.to_string(),
                    detail: "non-hex digit".to_string(),
                });
            }
        }
    }
    Ok(bytes)
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
