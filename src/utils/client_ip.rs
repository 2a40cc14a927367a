//! Client IP extraction for request echo endpoints.

use axum::http::HeaderMap;
use std::net::SocketAddr;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Returns the client IP address for a request.
///
/// When `behind_proxy` is set, the first `X-Forwarded-For` entry wins, then
/// `X-Real-IP`. Otherwise, or when neither header is usable, the peer socket
/// address is used.
pub fn client_ip(headers: &HeaderMap, peer: &SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        let forwarded = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let real_ip = || {
            headers
                .get(X_REAL_IP)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        if let Some(ip) = forwarded.or_else(real_ip) {
            return ip.to_string();
        }
    }

    peer.ip().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "10.0.0.7:51234".parse().unwrap()
    }

    #[test]
    fn test_peer_address_without_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.9"));

        assert_eq!(client_ip(&headers, &peer(), false), "10.0.0.7");
    }

    #[test]
    fn test_first_forwarded_entry_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert(X_REAL_IP, HeaderValue::from_static("198.51.100.2"));

        assert_eq!(client_ip(&headers, &peer(), true), "203.0.113.9");
    }

    #[test]
    fn test_real_ip_fallback_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(X_REAL_IP, HeaderValue::from_static("198.51.100.2"));

        assert_eq!(client_ip(&headers, &peer(), true), "198.51.100.2");
    }

    #[test]
    fn test_peer_fallback_behind_proxy() {
        assert_eq!(client_ip(&HeaderMap::new(), &peer(), true), "10.0.0.7");
    }

    #[test]
    fn test_ipv6_peer() {
        let peer: SocketAddr = "[::1]:3000".parse().unwrap();
        assert_eq!(client_ip(&HeaderMap::new(), &peer, false), "::1");
    }
}
