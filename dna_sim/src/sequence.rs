use super::base::{self, CodecError, UNKNOWN_BASE};
use std::fmt;

/// A run of 2-bit base codes. The reference never contains the unknown
/// sentinel; reconstructions carry it at uncovered positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn from_codes(codes: Vec<u8>) -> Self {
        Self(codes)
    }
    /// An all-unknown sequence, the starting state of a reconstruction.
    pub fn unknown(len: usize) -> Self {
        Self(vec![UNKNOWN_BASE; len])
    }
    /// Parse a run of symbols, failing on the first one outside the
    /// alphabet.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, CodecError> {
        let codes = symbols
            .iter()
            .map(|&sym| base::encode(sym))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(codes))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn as_codes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &code in &self.0 {
            write!(f, "{}", base::decode(code) as char)?;
        }
        Ok(())
    }
}
