//! Application settings data repository.
//!
//! The settings live in a single row with a fixed id; reads return `None`
//! until the setup flow or an admin writes it, and writes upsert the row.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::settings::{AdminSettings, UpdateSettingsParam};

/// Fixed primary key of the single settings row.
const SETTINGS_ROW_ID: i32 = 1;

/// Repository providing database operations for the application settings row.
pub struct SettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsRepository<'a> {
    /// Creates a new SettingsRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the settings row.
    ///
    /// # Returns
    /// - `Ok(Some(AdminSettings))` - Settings row exists
    /// - `Ok(None)` - Settings have never been written
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self) -> Result<Option<AdminSettings>, DbErr> {
        let entity = entity::prelude::AdminSetting::find_by_id(SETTINGS_ROW_ID)
            .one(self.db)
            .await?;

        Ok(entity.map(AdminSettings::from_entity))
    }

    /// Writes the settings row, inserting it on first use.
    ///
    /// # Arguments
    /// - `param` - Full replacement values for every setting
    ///
    /// # Returns
    /// - `Ok(AdminSettings)` - The stored settings
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpdateSettingsParam) -> Result<AdminSettings, DbErr> {
        let entity = entity::prelude::AdminSetting::insert(entity::admin_setting::ActiveModel {
            id: ActiveValue::Set(SETTINGS_ROW_ID),
            school_name: ActiveValue::Set(param.school_name),
            contact_email: ActiveValue::Set(param.contact_email),
            booking_window_days: ActiveValue::Set(param.booking_window_days),
            max_active_bookings: ActiveValue::Set(param.max_active_bookings),
            registration_open: ActiveValue::Set(param.registration_open),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::admin_setting::Column::Id)
                .update_columns([
                    entity::admin_setting::Column::SchoolName,
                    entity::admin_setting::Column::ContactEmail,
                    entity::admin_setting::Column::BookingWindowDays,
                    entity::admin_setting::Column::MaxActiveBookings,
                    entity::admin_setting::Column::RegistrationOpen,
                    entity::admin_setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(AdminSettings::from_entity(entity))
    }
}
