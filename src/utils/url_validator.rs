//! Validation for URLs submitted to the shortener.

use url::Url;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedProtocol,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` starts with `http://` or `https://` and parses as an absolute URL.
///
/// The input is not rewritten: the same string is stored and echoed back, so
/// deduplication is by exact match.
///
/// # Errors
///
/// Returns [`UrlValidationError::UnsupportedProtocol`] for any other prefix and
/// [`UrlValidationError::InvalidFormat`] when the URL cannot be parsed or has no host.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if !input.starts_with("http://") && !input.starts_with("https://") {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat("missing host".to_string()));
    }

    Ok(())
}
