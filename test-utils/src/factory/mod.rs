//! Factory methods for creating test entities with sensible defaults.
//!
//! Each factory follows a builder pattern: construct with a database connection,
//! override the fields the test cares about, then `build()` to insert the entity.

pub mod booking;
pub mod helpers;
pub mod lesson;
pub mod user;
