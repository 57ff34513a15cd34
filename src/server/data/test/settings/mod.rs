use crate::server::{data::settings::SettingsRepository, model::settings::UpdateSettingsParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get;
mod upsert;

/// Builds an update parameter with distinctive values for one test.
fn settings_param(school_name: &str) -> UpdateSettingsParam {
    UpdateSettingsParam {
        school_name: school_name.to_string(),
        contact_email: "office@example.com".to_string(),
        booking_window_days: 21,
        max_active_bookings: 2,
        registration_open: true,
    }
}
