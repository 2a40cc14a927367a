//! Handler for the request header echo.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, HeaderName, header},
};
use std::net::SocketAddr;

use crate::api::dto::whoami::WhoAmIResponse;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Echoes the caller's IP address, preferred language and user agent.
///
/// # Endpoint
///
/// `GET /api/whoami`
///
/// Forwarded headers are only trusted when `BEHIND_PROXY` is enabled.
pub async fn whoami_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        ipaddress: client_ip(&headers, &peer, state.options.behind_proxy),
        language: header_string(&headers, header::ACCEPT_LANGUAGE),
        software: header_string(&headers, header::USER_AGENT),
    })
}

fn header_string(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
