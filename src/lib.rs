//! Core logic for the semordnilap word-relation finder.
//!
//! The pipeline fetches a page, strips its markup, normalizes the surviving
//! text into a pool of lowercase alphabetic words, and reports every word
//! that is a palindrome or one half of an anagram pair. The relation engine
//! in [`relate`] is pure; retrieval and extraction live at the edges.

pub mod anagram;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod io_utils;
pub mod mirror;
pub mod normalize;
pub mod relate;

use std::collections::HashSet;

/// Candidate pool and result collection. Words carry no identity beyond
/// their value, so a plain set is the whole data model.
pub type WordSet = HashSet<String>;

pub use anagram::anagrams_of;
pub use config::Config;
pub use error::SemordnilapError;
pub use extract::extract_text;
pub use fetch::fetch_page;
pub use mirror::{collect_palindromes, is_palindrome, mirror};
pub use normalize::normalize;
pub use relate::find_related;
