//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - In-memory and PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
