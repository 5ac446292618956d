use thiserror::Error;

#[derive(Error, Debug)]
pub enum SemordnilapError {
    /// Retrieval failed before the engine was reached. Always fatal; the
    /// pipeline never continues on a stale or missing page.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Propagated HTTP client failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch all for unexpected internal problems.
    #[error("internal error: {0}")]
    Internal(String),
}
