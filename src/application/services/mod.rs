//! Business logic services for the application layer.

pub mod exercise_service;
pub mod short_link_service;
pub mod timestamp_service;

pub use exercise_service::{ExerciseService, LogExercise};
pub use short_link_service::ShortLinkService;
pub use timestamp_service::TimestampService;
