// huffman_code/src/codec.rs

use contracts::debug_ensures;
use tracing::debug;

use crate::bits::BitString;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::{count_frequencies, Symbol};
use crate::tree::{build_tree, HuffNode, HuffmanTree};

/// The output of [`huffman_encode`]: the bit stream and the tree needed to
/// read it back.
///
/// `tree` is `None` only for empty input, in which case `bits` is empty too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<S> {
    pub bits: BitString,
    pub tree: Option<HuffmanTree<S>>,
}

impl<S: Symbol> Encoded<S> {
    /// Decodes `bits` against the stored tree.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::MalformedStream`] if there is no tree but
    /// there are bits, or if [`huffman_decode`] rejects the stream.
    pub fn decode(&self) -> Result<Vec<S>> {
        match &self.tree {
            Some(tree) => huffman_decode(&self.bits, tree),
            None if self.bits.is_empty() => Ok(Vec::new()),
            None => Err(HuffmanError::MalformedStream(format!(
                "{} bits with no tree to decode them",
                self.bits.len()
            ))),
        }
    }
}

/// Encodes a sequence of symbols with a Huffman code built from the sequence
/// itself.
///
/// Empty input yields an empty bit stream and no tree.
///
/// # Arguments
///
/// * `input` - Slice of symbols to encode.
///
/// # Returns
///
/// * `Result<Encoded<S>>` - The concatenated codes together with the tree
///                          that produced them, or an error.
///
/// # Errors
///
/// Returns [`HuffmanError::Lookup`] if an input symbol is missing from the
/// generated code table. This can only happen through an internal bug.
///
/// # Examples
///
/// ```
/// use huffman_code::{huffman_decode, huffman_encode};
///
/// let text: Vec<char> = "abracadabra".chars().collect();
/// let encoded = huffman_encode(&text).unwrap();
/// let tree = encoded.tree.as_ref().unwrap();
/// assert_eq!(encoded.bits.len(), tree.weighted_path_length());
/// assert_eq!(huffman_decode(&encoded.bits, tree).unwrap(), text);
/// ```
pub fn huffman_encode<S: Symbol>(input: &[S]) -> Result<Encoded<S>> {
    if input.is_empty() {
        debug!("empty input, nothing to encode");
        return Ok(Encoded {
            bits: BitString::new(),
            tree: None,
        });
    }

    let tree = build_tree(&count_frequencies(input))?;
    let table = CodeTable::from_tree(&tree);
    let bits = encode_symbols(input, &table)?;

    Ok(Encoded {
        bits,
        tree: Some(tree),
    })
}

/// Concatenates the code of each symbol of `input`, in order.
///
/// # Errors
///
/// Returns [`HuffmanError::Lookup`] on the first symbol without a code. No
/// symbol is ever skipped.
#[debug_ensures(table.len() < 2 || ret.as_ref().map_or(true, |bits| bits.len() >= input.len()))]
pub fn encode_symbols<S: Symbol>(input: &[S], table: &CodeTable<S>) -> Result<BitString> {
    let mut bits = BitString::new();
    for symbol in input {
        bits.extend_from(table.lookup(symbol)?);
    }

    debug!(
        symbols = input.len(),
        bits = bits.len(),
        "encoded symbols"
    );
    Ok(bits)
}

/// Decodes `bits` by walking `tree` from the root.
///
/// A leaf is recognised before the next bit is consumed: when the walk sits
/// on a leaf, its symbol is emitted and the walk restarts at the root for
/// that same bit. Whatever leaf the final bit lands on is emitted last.
///
/// A single-leaf tree carries no path information, so it decodes an empty
/// stream to its symbol repeated `count` times. A tree with two or more
/// leaves decodes an empty stream to an empty sequence.
///
/// # Arguments
///
/// * `bits` - The encoded stream.
/// * `tree` - The tree the stream was encoded with.
///
/// # Returns
///
/// * `Result<Vec<S>>` - The decoded symbols in order, or an error.
///
/// # Errors
///
/// Returns [`HuffmanError::MalformedStream`] if the stream ends partway
/// through a code, or if a single-leaf tree is given any bits.
pub fn huffman_decode<S: Symbol>(bits: &BitString, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let root = tree.root();

    if let HuffNode::Leaf { symbol, count } = root {
        if !bits.is_empty() {
            return Err(HuffmanError::MalformedStream(format!(
                "single-symbol tree cannot decode {} bits",
                bits.len()
            )));
        }
        return Ok(vec![symbol.clone(); *count]);
    }

    let mut decoded = Vec::new();
    let mut node = root;

    for (position, bit) in bits.iter().enumerate() {
        if let HuffNode::Leaf { symbol, .. } = node {
            decoded.push(symbol.clone());
            node = root;
        }

        node = node.child(bit).ok_or_else(|| {
            HuffmanError::MalformedStream(format!("no branch to follow at bit {}", position))
        })?;
    }

    match node {
        HuffNode::Leaf { symbol, .. } => decoded.push(symbol.clone()),
        HuffNode::Internal { .. } if !bits.is_empty() => {
            return Err(HuffmanError::MalformedStream(format!(
                "stream of {} bits ends inside a code",
                bits.len()
            )));
        }
        HuffNode::Internal { .. } => {}
    }

    debug!(
        bits = bits.len(),
        symbols = decoded.len(),
        "decoded stream"
    );
    Ok(decoded)
}

/// Encodes a text, one symbol per `char`.
pub fn huffman_encode_text(text: &str) -> Result<Encoded<char>> {
    let symbols: Vec<char> = text.chars().collect();
    huffman_encode(&symbols)
}

/// Decodes `bits` with a tree over `char` symbols back into a `String`.
pub fn huffman_decode_text(bits: &BitString, tree: &HuffmanTree<char>) -> Result<String> {
    Ok(huffman_decode(bits, tree)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Bit;
    use proptest::prelude::*;
    use rand::Rng;

    /// Helper function to generate random text with a skewed letter
    /// distribution.
    fn generate_random_text(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| {
                if rng.gen_bool(0.5) {
                    'e'
                } else {
                    rng.gen_range(b'a'..=b'z') as char
                }
            })
            .collect()
    }

    fn bits(text: &str) -> BitString {
        text.parse().unwrap()
    }

    #[test]
    fn test_abracadabra_encode_decode() {
        let encoded = huffman_encode_text("abracadabra").unwrap();
        let tree = encoded.tree.as_ref().unwrap();

        assert_eq!(encoded.bits.to_string(), "10010001011101010010001");
        assert_eq!(encoded.bits.len(), 23);

        let decoded = huffman_decode_text(&encoded.bits, tree).unwrap();
        assert_eq!(decoded, "abracadabra");
    }

    #[test]
    fn test_empty_encode_decode() {
        let encoded = huffman_encode_text("").unwrap();
        assert!(encoded.bits.is_empty());
        assert!(encoded.tree.is_none());
        assert!(encoded.decode().unwrap().is_empty());
    }

    #[test]
    fn test_bits_without_tree_are_malformed() {
        let encoded: Encoded<char> = Encoded {
            bits: bits("01"),
            tree: None,
        };
        assert!(matches!(
            encoded.decode(),
            Err(HuffmanError::MalformedStream(_))
        ));
    }

    #[test]
    fn test_single_symbol_encode_decode() {
        let encoded = huffman_encode_text("aaaa").unwrap();
        let tree = encoded.tree.as_ref().unwrap();

        assert_eq!(tree.root(), &HuffNode::leaf('a', 4));
        assert!(encoded.bits.is_empty());
        assert_eq!(huffman_decode_text(&encoded.bits, tree).unwrap(), "aaaa");
    }

    #[test]
    fn test_single_leaf_rejects_bits() {
        let tree = HuffmanTree::from_symbols(&['a', 'a']).unwrap();
        assert!(matches!(
            huffman_decode(&bits("0"), &tree),
            Err(HuffmanError::MalformedStream(_))
        ));
    }

    #[test]
    fn test_truncated_stream_is_malformed() {
        let encoded = huffman_encode_text("abracadabra").unwrap();
        let tree = encoded.tree.as_ref().unwrap();

        // "00" is the first two bits of 'r' (000) or 'b' (001).
        let err = huffman_decode(&bits("100"), tree).unwrap_err();
        assert!(matches!(err, HuffmanError::MalformedStream(_)));
    }

    #[test]
    fn test_empty_bits_with_multi_leaf_tree() {
        let tree = HuffmanTree::from_symbols(&['x', 'y']).unwrap();
        assert!(huffman_decode(&BitString::new(), &tree).unwrap().is_empty());
    }

    #[test]
    fn test_decode_last_bit_lands_on_leaf() {
        // 'x' (first seen) is the smallest, so it is the right child.
        let tree = HuffmanTree::from_symbols(&['x', 'y']).unwrap();
        let stream = BitString::from(vec![Bit::One, Bit::Zero, Bit::One]);
        let decoded = huffman_decode(&stream, &tree).unwrap();
        assert_eq!(decoded, vec!['x', 'y', 'x']);
    }

    #[test]
    fn test_lookup_error_is_not_skipped() {
        let tree = HuffmanTree::from_symbols(&['a', 'b']).unwrap();
        let table = CodeTable::from_tree(&tree);

        let err = encode_symbols(&['a', 'c', 'b'], &table).unwrap_err();
        match err {
            HuffmanError::Lookup { symbol } => assert_eq!(symbol, "'c'"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_encode_decode_random() {
        let text = generate_random_text(4096);
        let encoded = huffman_encode_text(&text).unwrap();
        let tree = encoded.tree.as_ref().unwrap();

        assert_eq!(encoded.bits.len(), tree.weighted_path_length());
        assert_eq!(huffman_decode_text(&encoded.bits, tree).unwrap(), text);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let text = generate_random_text(512);
        let first = huffman_encode_text(&text).unwrap();
        let second = huffman_encode_text(&text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_char_symbols() {
        let words = ["the", "cat", "sat", "on", "the", "mat", "the", "end"];
        let encoded = huffman_encode(&words).unwrap();
        assert_eq!(encoded.decode().unwrap(), words.to_vec());
    }

    proptest! {
        #[test]
        fn test_encode_decode_prop(text in ".{1,256}") {
            let encoded = huffman_encode_text(&text).unwrap();
            let tree = encoded.tree.as_ref().unwrap();

            prop_assert_eq!(tree.count(), text.chars().count());
            prop_assert_eq!(encoded.bits.len(), tree.weighted_path_length());
            prop_assert_eq!(huffman_decode_text(&encoded.bits, tree).unwrap(), text);
        }

        #[test]
        fn test_encode_decode_small_alphabet_prop(
            symbols in proptest::collection::vec(0u8..4, 1usize..=2048)
        ) {
            // Few distinct values means many equal counts, exercising ties.
            let first = huffman_encode(&symbols).unwrap();
            let second = huffman_encode(&symbols).unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.decode().unwrap(), symbols);
        }
    }
}
