//! 2-bit encoding of the nucleotide alphabet.
use thiserror::Error;

/// Code for a position no read supports. Never produced by `encode`.
pub const UNKNOWN_BASE: u8 = 0xFF;

/// The four symbols, ordered by their 2-bit code.
pub const ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid symbol '{0}' (expected one of A/C/G/T)")]
    InvalidSymbol(char),
}

/// Map a symbol to its 2-bit code. Lowercase is accepted so externally
/// supplied sequences parse; anything outside the alphabet is an error.
pub fn encode(symbol: u8) -> Result<u8, CodecError> {
    match symbol {
        b'A' | b'a' => Ok(0),
        b'C' | b'c' => Ok(1),
        b'G' | b'g' => Ok(2),
        b'T' | b't' => Ok(3),
        _ => Err(CodecError::InvalidSymbol(symbol as char)),
    }
}

/// Map a 2-bit code back to its symbol. Codes outside 0..=3, including
/// `UNKNOWN_BASE`, render as 'N'.
pub fn decode(code: u8) -> u8 {
    match code {
        0 => b'A',
        1 => b'C',
        2 => b'G',
        3 => b'T',
        _ => b'N',
    }
}
