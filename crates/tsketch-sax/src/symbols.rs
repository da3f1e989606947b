//! Symbol mapping and the SAX word type

use crate::breakpoints::{validate_alphabet_size, BreakpointTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use tsketch_core::{Error, Result};

/// Render a symbol index as a lowercase letter (`0 -> 'a'`)
///
/// Callers must pass an index below [`crate::MAX_ALPHABET_SIZE`].
pub fn symbol_for_index(index: usize) -> char {
    debug_assert!(index < crate::MAX_ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// Parse a symbol back to its index, accepting either case
pub fn index_for_symbol(symbol: char) -> Option<usize> {
    let lower = symbol.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

/// A SAX string: one symbol per PAA segment, in segment order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaxWord {
    symbols: String,
    alphabet_size: usize,
}

impl SaxWord {
    /// Build a word from symbol indices
    pub fn from_indices(indices: &[usize], alphabet_size: usize) -> Result<Self> {
        validate_alphabet_size(alphabet_size)?;
        if let Some(&bad) = indices.iter().find(|&&i| i >= alphabet_size) {
            return Err(Error::InvalidInput(format!(
                "Symbol index {bad} outside alphabet of size {alphabet_size}"
            )));
        }
        Ok(Self {
            symbols: indices.iter().map(|&i| symbol_for_index(i)).collect(),
            alphabet_size,
        })
    }

    /// Parse a word, checking every symbol against the alphabet
    ///
    /// Uppercase input is accepted and stored lowercase.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsketch_sax::SaxWord;
    ///
    /// let word = SaxWord::parse("aBcd", 4).unwrap();
    /// assert_eq!(word.as_str(), "abcd");
    /// assert!(SaxWord::parse("abce", 4).is_err());
    /// ```
    pub fn parse(text: &str, alphabet_size: usize) -> Result<Self> {
        validate_alphabet_size(alphabet_size)?;
        let indices = text
            .chars()
            .map(|c| {
                index_for_symbol(c)
                    .filter(|&i| i < alphabet_size)
                    .ok_or_else(|| {
                        Error::InvalidInput(format!(
                            "Symbol '{c}' outside alphabet of size {alphabet_size}"
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_indices(&indices, alphabet_size)
    }

    /// The symbols as a string slice
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Size of the alphabet the word was drawn from
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Number of symbols (equals the PAA segment count)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the word has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol indices in segment order
    pub fn indices(&self) -> Vec<usize> {
        self.symbols
            .bytes()
            .map(|b| (b - b'a') as usize)
            .collect()
    }
}

impl fmt::Display for SaxWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl AsRef<str> for SaxWord {
    fn as_ref(&self) -> &str {
        &self.symbols
    }
}

/// Map each value to its symbol under `table`
pub fn map_to_symbols(values: &[f64], table: &BreakpointTable) -> SaxWord {
    SaxWord {
        symbols: values
            .iter()
            .map(|&v| symbol_for_index(table.symbol_index(v)))
            .collect(),
        alphabet_size: table.alphabet_size(),
    }
}
