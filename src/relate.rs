//! Relation engine: the union of palindromes and anagram-paired words.

use log::debug;

use crate::anagram::anagrams_of;
use crate::mirror::collect_palindromes;
use crate::WordSet;

/// Return every word in `words` that is a palindrome or a permutation of
/// another word in the pool, as one flat set.
///
/// A word is never matched against itself: `anagrams_of` excludes the
/// original spelling, so `{"ab"}` alone yields nothing while
/// `{"ab", "ba"}` yields both. Palindromes are collected independently,
/// so a palindrome with no anagram partner still appears. Pure over its
/// input; calling it twice on the same pool gives the same set.
///
/// Worst case O(k² · L!) for k words of length at most L, dominated by
/// permutation generation. Acceptable only because L is capped upstream.
pub fn find_related(words: &WordSet) -> WordSet {
    let mut related = collect_palindromes(words);
    let palindromes = related.len();

    for word in words {
        let rearrangements = anagrams_of(word);
        for other in words {
            if rearrangements.contains(other) {
                related.insert(word.clone());
                related.insert(other.clone());
            }
        }
    }

    debug!(
        "{} of {} words related ({} palindromes)",
        related.len(),
        words.len(),
        palindromes
    );
    related
}
