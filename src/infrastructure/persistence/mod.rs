//! Repository implementations.
//!
//! # In-memory
//!
//! - [`MemoryShortLinkRepository`] - Bidirectional URL ↔ code index
//! - [`MemoryUserRepository`] - Users indexed by id and username
//! - [`MemoryExerciseRepository`] - Per-user exercise lists
//!
//! # PostgreSQL
//!
//! Runtime-checked SQLx queries against the schema in `migrations/`.
//!
//! - [`PgShortLinkRepository`]
//! - [`PgUserRepository`]
//! - [`PgExerciseRepository`]

pub mod memory_exercise_repository;
pub mod memory_short_link_repository;
pub mod memory_user_repository;
pub mod pg_exercise_repository;
pub mod pg_short_link_repository;
pub mod pg_user_repository;

pub use memory_exercise_repository::MemoryExerciseRepository;
pub use memory_short_link_repository::MemoryShortLinkRepository;
pub use memory_user_repository::MemoryUserRepository;
pub use pg_exercise_repository::PgExerciseRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
pub use pg_user_repository::PgUserRepository;
