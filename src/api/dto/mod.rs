//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the wire format the tutorial clients expect, so some
//! fields carry serde renames (`_id`, `:_id`).

pub mod health;
pub mod shorturl;
pub mod timestamp;
pub mod users;
pub mod whoami;
