//! DTOs for the URL shortener endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
///
/// A missing `url` field deserializes to an empty string so it is reported
/// as an invalid URL rather than a malformed body.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            short_url: link.short_code,
        }
    }
}
