//! Core domain entities.
//!
//! - [`ShortLink`] - A URL mapped to a sequence code
//! - [`User`] - A registered exercise tracker user
//! - [`Exercise`] - A logged exercise, plus the [`ExerciseEntry`] and [`ExerciseLog`] views
//! - [`Timestamp`] - An interpreted date token
//!
//! Creation inputs live in separate structs (`NewUser`, `NewExercise`).

pub mod exercise;
pub mod short_link;
pub mod timestamp;
pub mod user;

pub use exercise::{Exercise, ExerciseEntry, ExerciseLog, NewExercise};
pub use short_link::ShortLink;
pub use timestamp::Timestamp;
pub use user::{NewUser, User};
