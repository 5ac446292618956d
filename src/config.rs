use std::path::PathBuf;

use crate::SemordnilapError;

/// Runtime configuration for the fetch-and-relate pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Longest word the normalizer lets through. Permutation generation is
    /// O(n!), so this cap is what keeps the anagram matcher tractable.
    pub max_word_len: usize,
    /// Where the raw markup is cached between download and parsing.
    pub cache_path: PathBuf,
}

/// Default cap matching the reference behaviour (words of up to 9 letters).
pub const DEFAULT_MAX_WORD_LEN: usize = 9;

impl Default for Config {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            cache_path: PathBuf::from("page.html"),
        }
    }
}

impl Config {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), SemordnilapError> {
        if self.max_word_len == 0 {
            return Err(SemordnilapError::Config(
                "max word length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_word_len, 9);
    }

    #[test]
    fn zero_length_cap_rejected() {
        let cfg = Config {
            max_word_len: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
