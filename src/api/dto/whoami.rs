//! DTO for the header echo endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub ipaddress: String,
    pub language: Option<String>,
    pub software: Option<String>,
}
