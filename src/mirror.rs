//! String reversal and the palindrome test built on it.

use crate::WordSet;

/// Return the character-reversal of `word`. Reversing twice yields the
/// original, so `mirror` is its own inverse.
pub fn mirror(word: &str) -> String {
    word.chars().rev().collect()
}

/// A word is a palindrome iff it equals its own mirror. Total over any
/// string; the empty word and single characters pass trivially.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// Filter a word pool down to its palindromes.
pub fn collect_palindromes(words: &WordSet) -> WordSet {
    words
        .iter()
        .filter(|w| is_palindrome(w))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_reverses() {
        assert_eq!(mirror("abc"), "cba");
        assert_eq!(mirror("ab"), "ba");
        assert_eq!(mirror("a"), "a");
        assert_eq!(mirror(""), "");
    }

    #[test]
    fn trivial_palindromes() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("x"));
    }

    #[test]
    fn palindrome_detection() {
        assert!(is_palindrome("aba"));
        assert!(is_palindrome("abba"));
        assert!(!is_palindrome("ab"));
        assert!(!is_palindrome("abca"));
    }

    #[test]
    fn collect_keeps_only_palindromes() {
        let words: crate::WordSet = ["a", "aa", "bab", "bc"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let got = collect_palindromes(&words);
        let want: crate::WordSet = ["a", "aa", "bab"].iter().map(|s| s.to_string()).collect();
        assert_eq!(got, want);
    }
}
