// huffman_code/src/code_table.rs

use std::collections::HashMap;
use std::fmt;

use contracts::debug_ensures;
use tracing::debug;

use crate::bits::{Bit, BitString};
use crate::error::{HuffmanError, Result};
use crate::frequency::{FrequencyEntry, Symbol};
use crate::tree::{HuffNode, HuffmanTree};

/// Maps each leaf symbol of a tree to its root-to-leaf path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, BitString>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walks `tree` depth-first, appending `0` for every left turn and `1`
    /// for every right turn. A single-leaf tree maps its symbol to the empty
    /// code.
    #[debug_ensures(ret.len() == tree.leaves().len())]
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = HashMap::new();
        assign_codes(tree.root(), &BitString::new(), &mut codes);
        debug!(codes = codes.len(), "generated code table");
        CodeTable { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> {
        self.codes.iter()
    }

    /// True when no code is a prefix of a different symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().all(|(a, code_a)| {
            self.codes
                .iter()
                .all(|(b, code_b)| a == b || !code_a.starts_with(code_b))
        })
    }

    /// Number of bits needed to encode a text with the given symbol counts.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::Lookup`] if a symbol has no code.
    pub fn encoded_len(&self, frequencies: &[FrequencyEntry<S>]) -> Result<usize> {
        frequencies.iter().try_fold(0, |total, entry| {
            self.lookup(&entry.symbol)
                .map(|code| total + entry.count * code.len())
        })
    }

    pub(crate) fn lookup(&self, symbol: &S) -> Result<&BitString> {
        self.codes.get(symbol).ok_or_else(|| HuffmanError::Lookup {
            symbol: format!("{:?}", symbol),
        })
    }
}

fn assign_codes<S: Symbol>(
    node: &HuffNode<S>,
    path: &BitString,
    codes: &mut HashMap<S, BitString>,
) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), path.clone());
        }
        HuffNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push(Bit::Zero);
            assign_codes(left, &left_path, codes);

            let mut right_path = path.clone();
            right_path.push(Bit::One);
            assign_codes(right, &right_path, codes);
        }
    }
}

impl<S: Symbol> fmt::Display for CodeTable<S> {
    /// One `symbol<TAB>code` row per entry, shortest codes first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<(String, String)> = self
            .codes
            .iter()
            .map(|(symbol, code)| (format!("{:?}", symbol), code.to_string()))
            .collect();
        rows.sort_by(|(_, a), (_, b)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        for (symbol, code) in rows {
            writeln!(f, "\t{}\t{}", symbol, code)?;
        }
        Ok(())
    }
}
