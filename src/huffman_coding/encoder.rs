use std::fmt::{Display, Formatter};

use super::code_table::CodeTable;
use crate::error::{HuffmanError, Result};

/// The encoded text as a string of `'0'` and `'1'` characters. Nothing is packed
/// into bytes; `byte_len` reports what the packed size would be.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedOutput(String);

impl EncodedOutput {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of code bits.
    pub fn bit_len(&self) -> usize {
        self.0.len()
    }

    /// Bytes needed to hold the bits, the last one padded.
    pub fn byte_len(&self) -> usize {
        (self.bit_len() + 7) / 8
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for EncodedOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every symbol of the text with its code, in order.
///
/// Fails if the table has no code for some symbol, which only happens when the table
/// was built from a different text.
pub fn encode(text: &str, table: &CodeTable) -> Result<EncodedOutput> {
    let mut bits = String::with_capacity(text.len() * 2);
    for (position, symbol) in text.chars().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(HuffmanError::UnknownSymbol { symbol, position })?;
        bits.push_str(code);
    }
    Ok(EncodedOutput(bits))
}
