//! Exhaustive anagram enumeration.
//!
//! This implementation is intentionally literal: it enumerates the full
//! permutation space of a word rather than comparing sorted-character
//! signatures. The search space is factorial in word length, so callers
//! must bound word length before invoking it; the normalizer's cap exists
//! for exactly that reason.

use crate::WordSet;

/// Return every distinct rearrangement of `word`'s characters, excluding
/// `word` itself. Words of length 0 or 1 have no distinct rearrangement,
/// so their result is empty. Repeated characters collapse through the set:
/// `anagrams_of("aba")` is `{"aab", "baa"}`, not six entries.
pub fn anagrams_of(word: &str) -> WordSet {
    let chars: Vec<char> = word.chars().collect();
    let mut out = WordSet::new();
    if chars.len() > 1 {
        let mut used = vec![false; chars.len()];
        let mut prefix = String::with_capacity(word.len());
        permute(&chars, &mut used, &mut prefix, &mut out);
        out.remove(word);
    }
    out
}

fn permute(chars: &[char], used: &mut [bool], prefix: &mut String, out: &mut WordSet) {
    if prefix.chars().count() == chars.len() {
        out.insert(prefix.clone());
        return;
    }
    for i in 0..chars.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        prefix.push(chars[i]);
        permute(chars, used, prefix, out);
        prefix.pop();
        used[i] = false;
    }
}
