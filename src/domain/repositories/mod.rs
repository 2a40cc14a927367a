//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so services can run against process
//! memory or PostgreSQL interchangeably.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ShortLinkRepository`] - URL ↔ short code mappings
//! - [`UserRepository`] - Exercise tracker users
//! - [`ExerciseRepository`] - Append-only exercise log

pub mod exercise_repository;
pub mod short_link_repository;
pub mod user_repository;

pub use exercise_repository::ExerciseRepository;
pub use short_link_repository::ShortLinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

/// Outcome of an insert-if-absent operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inserted<T> {
    /// The record was created by this call.
    New(T),
    /// A record with the same unique key already existed and was left untouched.
    Existing(T),
}

impl<T> Inserted<T> {
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::New(value) | Self::Existing(value) => value,
        }
    }
}
