//! Source body retrieval.
//!
//! Sources are fetched one at a time with a bounded timeout; a string
//! without an `http(s)://` scheme is treated as a local file path, which
//! keeps offline runs and tests off the network.

use std::time::Duration;

use crate::error::SourceError;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT: u64 = 15;

/// Fetch the raw text body of one configured source.
pub fn load_source(source: &str, timeout_secs: Option<u64>) -> Result<String, SourceError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT)))
            .build()?;
        let body = client.get(source).send()?.error_for_status()?.text()?;
        Ok(body)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}
