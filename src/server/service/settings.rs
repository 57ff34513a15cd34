//! Application settings service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::settings::SettingsRepository,
    error::AppError,
    model::settings::{AdminSettings, UpdateSettingsParam},
};

/// Service providing business logic for the application settings.
pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    /// Creates a new SettingsService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the current settings, falling back to defaults.
    ///
    /// Before the setup flow writes the settings row, every consumer (booking
    /// rules, registration toggle) sees the defaults rather than an error.
    ///
    /// # Returns
    /// - `Ok(AdminSettings)` - Stored settings, or defaults when unset
    /// - `Err(AppError)` - Database error during query
    pub async fn get(&self) -> Result<AdminSettings, AppError> {
        let settings = SettingsRepository::new(self.db).get().await?;

        Ok(settings.unwrap_or_else(AdminSettings::defaults))
    }

    /// Replaces the settings.
    ///
    /// # Arguments
    /// - `param` - Full replacement values for every setting
    ///
    /// # Returns
    /// - `Ok(AdminSettings)` - The stored settings
    /// - `Err(AppError::BadRequest)` - A value fails validation
    pub async fn update(&self, param: UpdateSettingsParam) -> Result<AdminSettings, AppError> {
        if param.school_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "School name must not be empty".to_string(),
            ));
        }
        if !param.contact_email.contains('@') {
            return Err(AppError::BadRequest(
                "Contact email must be a valid address".to_string(),
            ));
        }
        if param.booking_window_days < 1 {
            return Err(AppError::BadRequest(
                "Booking window must be at least one day".to_string(),
            ));
        }
        if param.max_active_bookings < 1 {
            return Err(AppError::BadRequest(
                "Active booking limit must be at least one".to_string(),
            ));
        }

        let settings = SettingsRepository::new(self.db).upsert(param).await?;

        Ok(settings)
    }
}
