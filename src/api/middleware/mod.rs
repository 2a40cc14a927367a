//! HTTP middleware for request processing.
//!
//! Provides the error status policy and request tracing.

pub mod error_status;
pub mod tracing;
