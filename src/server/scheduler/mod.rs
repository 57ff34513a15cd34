//! Cron jobs for automated housekeeping.

pub mod maintenance;
