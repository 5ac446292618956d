//! Token normalization: the engine's input contract is lowercase
//! alphabetic words under the length cap, and this module enforces it.

use log::debug;

use crate::WordSet;

/// Turn raw text fragments into the candidate word pool: split on
/// whitespace, strip every non-alphabetic character, lowercase, drop
/// empties and anything longer than `max_word_len`, deduplicate.
///
/// The cap is a performance guard, not a domain rule: permutation
/// generation downstream is factorial in word length.
pub fn normalize<I, S>(fragments: I, max_word_len: usize) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = WordSet::new();
    let mut seen = 0usize;
    for fragment in fragments {
        for token in fragment.as_ref().split_whitespace() {
            seen += 1;
            let word: String = token
                .chars()
                .filter(|c| c.is_alphabetic())
                .flat_map(|c| c.to_lowercase())
                .collect();
            if !word.is_empty() && word.chars().count() <= max_word_len {
                words.insert(word);
            }
        }
    }
    debug!("normalized {} tokens into {} words", seen, words.len());
    words
}
