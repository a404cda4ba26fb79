//! Byte-string encoding for the remote `ByteArray` argument type.
//!
//! The target ABI serializes a byte string as
//! `[full_word_count, full_words..., pending_word, pending_word_len]`, where
//! full words hold 31 bytes each. Map names never exceed one pending word,
//! so only the single-word form is produced: `[0, 0x<hex>, len]`.

use thiserror::Error;

/// Maximum bytes held by the pending word.
pub const MAX_PENDING_BYTES: usize = 31;

/// A string too long for the single-word encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("byte string is {len} bytes, at most {max} are supported")]
pub struct LengthError {
    pub len: usize,
    pub max: usize,
}

/// A byte string in its three-token ABI form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedByteArray {
    /// Count of full 31-byte words; always zero for supported inputs.
    pub full_words: usize,
    /// The remaining bytes as a `0x`-prefixed hex literal.
    pub pending_word: String,
    /// Number of bytes in `pending_word`.
    pub pending_len: usize,
}

impl EncodedByteArray {
    /// Returns the three calldata tokens, in ABI order.
    pub fn tokens(&self) -> [String; 3] {
        [
            self.full_words.to_string(),
            self.pending_word.clone(),
            self.pending_len.to_string(),
        ]
    }
}

/// Encodes `s` as a single-word byte array.
pub fn encode_byte_array(s: &str) -> Result<EncodedByteArray, LengthError> {
    let bytes = s.as_bytes();
    if bytes.len() > MAX_PENDING_BYTES {
        return Err(LengthError {
            len: bytes.len(),
            max: MAX_PENDING_BYTES,
        });
    }
    Ok(EncodedByteArray {
        full_words: 0,
        pending_word: hex_literal(bytes),
        pending_len: bytes.len(),
    })
}

/// Formats `bytes` as one big-endian hex literal. An empty slice is `0x0`.
fn hex_literal(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "0x0".to_string();
    }
    format!("0x{}", hex::encode(bytes))
}
