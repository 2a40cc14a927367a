//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses in the wire shapes the tutorial clients expect.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - JSON-or-form body extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Error status policy and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
