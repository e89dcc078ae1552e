use std::io;

/// Local alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Everything that can go wrong while building or applying a Huffman code.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HuffmanError {
    /// The (filtered) input held no symbols, so there is no alphabet to build a tree from.
    #[error("nothing to encode: the input is empty")]
    EmptyInput,

    /// The encoder met a symbol the code table has no entry for. This means the
    /// table was built from some other input.
    #[error("no code for symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
}

impl From<HuffmanError> for io::Error {
    fn from(e: HuffmanError) -> Self {
        let kind = match e {
            HuffmanError::EmptyInput => io::ErrorKind::InvalidInput,
            HuffmanError::UnknownSymbol { .. } => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}
