//! Page retrieval.
//!
//! The raw markup takes a round trip through a cache file between download
//! and parsing. The file is a transient artifact, not state: nothing ever
//! reads a cache left over from an earlier run, and any retrieval failure
//! aborts the pipeline instead of falling back to stale bytes.

use std::fs;
use std::path::Path;

use log::info;

use crate::io_utils::io_error;
use crate::SemordnilapError;

/// Download `url` and return its markup, staging it through the cache
/// file at `cache_path`. Non-success status codes are hard errors.
pub fn fetch_page(url: &str, cache_path: &Path) -> Result<String, SemordnilapError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(SemordnilapError::Fetch(format!(
            "'{url}' answered {status}"
        )));
    }
    let body = response.text()?;
    info!("fetched {} bytes from {}", body.len(), url);
    cache_markup(&body, cache_path)
}

/// Write `markup` to the cache file and read it back.
pub fn cache_markup(markup: &str, cache_path: &Path) -> Result<String, SemordnilapError> {
    fs::write(cache_path, markup)
        .map_err(|e| io_error("writing page cache", cache_path, e))?;
    let cached = fs::read_to_string(cache_path)
        .map_err(|e| io_error("reading page cache", cache_path, e))?;
    Ok(cached)
}
