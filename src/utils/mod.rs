//! Utility functions for date handling, identifiers, URL checks and request metadata.
//!
//! - [`dates`] - Calendar parsing and legacy date rendering
//! - [`id_generator`] - Opaque record identifiers
//! - [`url_validator`] - Shortener URL validation
//! - [`client_ip`] - Client IP extraction from peer address and proxy headers

pub mod client_ip;
pub mod dates;
pub mod id_generator;
pub mod url_validator;
