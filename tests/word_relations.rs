use semordnilap::{anagrams_of, collect_palindromes, find_related, is_palindrome, WordSet};

fn set(words: &[&str]) -> WordSet {
    words.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_relation_table() {
    // The canonical small pools and their expected result sets
    assert_eq!(find_related(&set(&[])), set(&[]));
    assert_eq!(find_related(&set(&["a"])), set(&["a"]));
    assert_eq!(find_related(&set(&["a", "b"])), set(&["a", "b"]));
    assert_eq!(find_related(&set(&["a", "b", "ab"])), set(&["a", "b"]));
    assert_eq!(
        find_related(&set(&["a", "b", "ab", "ba"])),
        set(&["a", "b", "ab", "ba"])
    );
}

#[test]
fn test_palindrome_without_partner_survives() {
    // "noon" has no anagram partner in the pool but passes as a palindrome
    let got = find_related(&set(&["noon", "tide"]));
    assert_eq!(got, set(&["noon"]));
}

#[test]
fn test_anagram_family_all_members_reported() {
    let got = find_related(&set(&["stop", "pots", "spot", "other"]));
    assert_eq!(got, set(&["stop", "pots", "spot"]));
}

#[test]
fn test_palindrome_that_is_also_paired_appears_once() {
    // "abab"/"baba" are anagram partners and "abba" is a palindrome of the
    // same letters; the flat result holds each exactly once
    let got = find_related(&set(&["abab", "baba", "abba"]));
    assert_eq!(got.len(), 3);
    assert_eq!(got, set(&["abab", "baba", "abba"]));
}

#[test]
fn test_collect_palindromes_matches_predicate() {
    let pool = set(&["deed", "level", "word", "x", ""]);
    let got = collect_palindromes(&pool);
    for w in &pool {
        assert_eq!(got.contains(w), is_palindrome(w));
    }
}

#[test]
fn test_anagram_sets_exact() {
    assert_eq!(anagrams_of("ab"), set(&["ba"]));
    assert_eq!(anagrams_of("abc"), set(&["acb", "bac", "bca", "cab", "cba"]));
    assert_eq!(anagrams_of("aba"), set(&["aab", "baa"]));
    assert!(anagrams_of("a").is_empty());
    assert!(anagrams_of("").is_empty());
}
