// huffman_code/src/bits.rs

//! Logical bit sequences. Codes and encoded streams are kept one `Bit` per
//! element; nothing here packs bits into bytes.

use std::fmt;
use std::str::FromStr;

use crate::error::HuffmanError;

/// A single binary digit. `Zero` selects the left child, `One` the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = HuffmanError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(HuffmanError::MalformedStream(format!(
                "{} is not a binary digit",
                other
            ))),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// An ordered sequence of bits, used both for a single code and for a whole
/// encoded stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<Bit>,
}

impl BitString {
    pub fn new() -> Self {
        BitString { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BitString {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: Bit) {
        self.bits.push(bit);
    }

    /// Appends every bit of `other` in order.
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    /// Returns true if `prefix` is a (not necessarily proper) prefix of `self`.
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
    }
}

impl From<Vec<Bit>> for BitString {
    fn from(bits: Vec<Bit>) -> Self {
        BitString { bits }
    }
}

impl FromIterator<Bit> for BitString {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        BitString {
            bits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = Bit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = HuffmanError;

    /// Parses text made of `'0'` and `'1'` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(Bit::Zero),
                '1' => Ok(Bit::One),
                other => Err(HuffmanError::MalformedStream(format!(
                    "unexpected character {:?} at position {}",
                    other, i
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let bits: BitString = "0110".parse().unwrap();
        assert_eq!(bits.len(), 4);
        assert_eq!(
            bits.as_slice(),
            &[Bit::Zero, Bit::One, Bit::One, Bit::Zero]
        );
        assert_eq!(bits.to_string(), "0110");
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        let err = "01a1".parse::<BitString>().unwrap_err();
        assert!(matches!(err, HuffmanError::MalformedStream(_)));
    }

    #[test]
    fn test_empty_parses_to_empty() {
        let bits: BitString = "".parse().unwrap();
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    fn test_starts_with() {
        let long: BitString = "10110".parse().unwrap();
        let short: BitString = "101".parse().unwrap();
        assert!(long.starts_with(&short));
        assert!(!short.starts_with(&long));
        assert!(long.starts_with(&BitString::new()));
    }

    #[test]
    fn test_bit_conversions() {
        assert_eq!(Bit::from(true), Bit::One);
        assert_eq!(Bit::try_from(0u8).unwrap(), Bit::Zero);
        assert!(Bit::try_from(2u8).is_err());
        assert_eq!(Bit::One.as_u8(), 1);
    }
}
