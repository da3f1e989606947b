//! Symbol frequency counting

use crate::symbols::SaxWord;
use std::collections::BTreeMap;

/// Count occurrences of each symbol present in `word`
///
/// Only symbols that occur get an entry; the map iterates in symbol order.
///
/// # Examples
///
/// ```rust
/// use tsketch_sax::{symbol_frequencies, SaxWord};
///
/// let word = SaxWord::parse("abba", 4).unwrap();
/// let counts = symbol_frequencies(&word);
/// assert_eq!(counts.get(&'a'), Some(&2));
/// assert_eq!(counts.get(&'b'), Some(&2));
/// assert!(!counts.contains_key(&'c'));
/// ```
pub fn symbol_frequencies(word: &SaxWord) -> BTreeMap<char, usize> {
    symbol_frequencies_str(word.as_str())
}

/// Count symbol occurrences in a raw string, folding case to lowercase
pub fn symbol_frequencies_str(word: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for symbol in word.chars() {
        *counts.entry(symbol.to_ascii_lowercase()).or_insert(0) += 1;
    }
    counts
}
