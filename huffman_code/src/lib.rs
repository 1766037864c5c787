// huffman_code/src/lib.rs

//! Huffman Coding Library
//!
//! This library builds a prefix-free Huffman code from the symbol counts of
//! an input and uses it to turn the input into a sequence of bits and back.
//! The pipeline runs frequency counting, tree building, code table
//! generation, then encoding; decoding walks the tree directly.

pub mod bits;
pub mod code_table;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod source;
pub mod tree;

pub use bits::{Bit, BitString};
pub use code_table::CodeTable;
pub use codec::{
    encode_symbols, huffman_decode, huffman_decode_text, huffman_encode, huffman_encode_text,
    Encoded,
};
pub use error::{HuffmanError, Result};
pub use frequency::{count_frequencies, FrequencyEntry, Symbol};
pub use source::{DisplaySink, EncodingSink, FileSource, StrSource, TextSource};
pub use tree::{build_tree, HuffNode, HuffmanTree};
