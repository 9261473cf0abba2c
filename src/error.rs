use thiserror::Error;

/// Failure to obtain a source body. Never fatal for the run; the
/// pipeline logs it and moves on to the next source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}
