//! SeaORM entity models for the driveline database schema.

pub mod prelude;

pub mod admin_setting;
pub mod booking;
pub mod lesson;
pub mod user;
