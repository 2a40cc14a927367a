//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::TimestampService`] - Date token interpretation
//! - [`services::ShortLinkService`] - URL shortening and resolution
//! - [`services::ExerciseService`] - User registry and exercise log
//!
//! [`clock`] provides the time source for operations that default to "now".

pub mod clock;
pub mod services;
