// huffman_code/src/frequency.rs

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use contracts::debug_ensures;
use tracing::debug;

/// Anything that can act as one unit of the input alphabet.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

/// A distinct symbol together with its number of occurrences (always >= 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry<S> {
    pub symbol: S,
    pub count: usize,
}

impl<S> FrequencyEntry<S> {
    pub fn new(symbol: S, count: usize) -> Self {
        FrequencyEntry { symbol, count }
    }
}

/// Counts the occurrences of each distinct symbol.
///
/// Entries are returned in order of first occurrence in `symbols`. The tree
/// builder relies on this order to break ties between equal counts, so the
/// same input always yields the same tree.
///
/// # Examples
///
/// ```
/// use huffman_code::{count_frequencies, FrequencyEntry};
///
/// let text: Vec<char> = "abca".chars().collect();
/// let freqs = count_frequencies(&text);
/// assert_eq!(freqs[0], FrequencyEntry::new('a', 2));
/// assert_eq!(freqs.len(), 3);
/// ```
#[debug_ensures(ret.iter().map(|e| e.count).sum::<usize>() == symbols.len())]
#[debug_ensures(ret.iter().all(|e| e.count >= 1))]
pub fn count_frequencies<S: Symbol>(symbols: &[S]) -> Vec<FrequencyEntry<S>> {
    let mut index: HashMap<&S, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry<S>> = Vec::new();

    for symbol in symbols {
        match index.get(symbol) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(symbol, entries.len());
                entries.push(FrequencyEntry::new(symbol.clone(), 1));
            }
        }
    }

    debug!(
        symbols = symbols.len(),
        distinct = entries.len(),
        "counted symbol frequencies"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_abracadabra() {
        let text: Vec<char> = "abracadabra".chars().collect();
        let freqs = count_frequencies(&text);

        assert_eq!(
            freqs,
            vec![
                FrequencyEntry::new('a', 5),
                FrequencyEntry::new('b', 2),
                FrequencyEntry::new('r', 2),
                FrequencyEntry::new('c', 1),
                FrequencyEntry::new('d', 1),
            ]
        );
    }

    #[test]
    fn test_count_empty() {
        let text: Vec<char> = Vec::new();
        assert!(count_frequencies(&text).is_empty());
    }

    #[test]
    fn test_count_non_char_symbols() {
        let words = ["to", "be", "or", "not", "to", "be"];
        let freqs = count_frequencies(&words);
        assert_eq!(freqs.len(), 4);
        assert_eq!(freqs[0], FrequencyEntry::new("to", 2));
        assert_eq!(freqs[3], FrequencyEntry::new("not", 1));
    }
}
