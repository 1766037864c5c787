// huffman_code/src/error.rs

/// Error type for tree construction, encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum HuffmanError {
    /// A tree was requested for an empty frequency table.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// A frequency table listed a symbol twice or gave it a zero count.
    #[error("invalid frequency table: {0}")]
    InvalidFrequencies(String),

    /// A symbol had no entry in the code table. Indicates a bug in tree or
    /// table construction.
    #[error("symbol {symbol} has no entry in the code table")]
    Lookup { symbol: String },

    /// The bit stream does not describe a whole number of codes for the tree.
    #[error("malformed stream: {0}")]
    MalformedStream(String),

    /// Reading input from a text source failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
