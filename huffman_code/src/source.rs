// huffman_code/src/source.rs

//! Collaborators around the codec: where text comes from and where an
//! encoding goes. Nothing here is needed to encode or decode.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::code_table::CodeTable;
use crate::codec::Encoded;
use crate::error::Result;
use crate::frequency::Symbol;

/// Supplies the symbols of a text.
pub trait TextSource {
    fn read(&self) -> Result<Vec<char>>;
}

/// Text held in memory.
#[derive(Debug, Clone)]
pub struct StrSource {
    text: String,
}

impl StrSource {
    pub fn new(text: impl Into<String>) -> Self {
        StrSource { text: text.into() }
    }
}

impl TextSource for StrSource {
    fn read(&self) -> Result<Vec<char>> {
        Ok(self.text.chars().collect())
    }
}

/// A UTF-8 text file, read in full on every call to [`TextSource::read`].
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for FileSource {
    fn read(&self) -> Result<Vec<char>> {
        let text = fs::read_to_string(&self.path)?;
        debug!(path = %self.path.display(), bytes = text.len(), "read text file");
        Ok(text.chars().collect())
    }
}

/// Receives a finished encoding for display or storage.
pub trait EncodingSink<S: Symbol> {
    fn accept(&mut self, encoded: &Encoded<S>) -> Result<()>;
}

/// Writes an encoding as human-readable text: the bit string, and
/// optionally the code table and the tree structure.
pub struct DisplaySink<W: Write> {
    writer: W,
    show_codes: bool,
    show_tree: bool,
}

impl<W: Write> DisplaySink<W> {
    pub fn new(writer: W) -> Self {
        DisplaySink {
            writer,
            show_codes: false,
            show_tree: false,
        }
    }

    pub fn with_codes(mut self, show_codes: bool) -> Self {
        self.show_codes = show_codes;
        self
    }

    pub fn with_tree(mut self, show_tree: bool) -> Self {
        self.show_tree = show_tree;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<S: Symbol, W: Write> EncodingSink<S> for DisplaySink<W> {
    fn accept(&mut self, encoded: &Encoded<S>) -> Result<()> {
        writeln!(self.writer, "Encoded Bits ({} bits):", encoded.bits.len())?;
        writeln!(self.writer, "{}", encoded.bits)?;

        let tree = match &encoded.tree {
            Some(tree) => tree,
            None => {
                writeln!(self.writer, "(no tree: input was empty)")?;
                return Ok(());
            }
        };

        if self.show_codes {
            writeln!(self.writer, "Code Table:")?;
            write!(self.writer, "{}", CodeTable::from_tree(tree))?;
        }
        if self.show_tree {
            writeln!(self.writer, "Huffman Tree:")?;
            write!(self.writer, "{}", tree)?;
        }
        Ok(())
    }
}
