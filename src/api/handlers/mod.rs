//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one of the hosted APIs.

pub mod health;
pub mod shorturl;
pub mod timestamp;
pub mod users;
pub mod whoami;

pub use health::health_handler;
pub use shorturl::{redirect_handler, shorten_handler};
pub use timestamp::{now_handler, timestamp_handler};
pub use users::{create_user_handler, exercise_log_handler, list_users_handler, log_exercise_handler};
pub use whoami::whoami_handler;
