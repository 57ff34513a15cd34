//! Application settings domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::settings::AdminSettingsDto;

/// Application-wide settings maintained by admins.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSettings {
    pub school_name: String,
    pub contact_email: String,
    /// How far in advance (days) a lesson may be booked.
    pub booking_window_days: i32,
    /// Cap on a student's pending + confirmed bookings.
    pub max_active_bookings: i32,
    pub registration_open: bool,
    pub updated_at: DateTime<Utc>,
}

impl AdminSettings {
    /// Settings used until the setup flow (or an admin) writes the row.
    pub fn defaults() -> Self {
        Self {
            school_name: "Driveline Driving School".to_string(),
            contact_email: "office@driveline.example".to_string(),
            booking_window_days: 30,
            max_active_bookings: 3,
            registration_open: true,
            updated_at: Utc::now(),
        }
    }

    /// Converts the settings domain model to a DTO for API responses.
    pub fn into_dto(self) -> AdminSettingsDto {
        AdminSettingsDto {
            school_name: self.school_name,
            contact_email: self.contact_email,
            booking_window_days: self.booking_window_days,
            max_active_bookings: self.max_active_bookings,
            registration_open: self.registration_open,
        }
    }

    /// Converts an entity model to a settings domain model at the repository boundary.
    pub fn from_entity(entity: entity::admin_setting::Model) -> Self {
        Self {
            school_name: entity.school_name,
            contact_email: entity.contact_email,
            booking_window_days: entity.booking_window_days,
            max_active_bookings: entity.max_active_bookings,
            registration_open: entity.registration_open,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for replacing the application settings.
#[derive(Debug, Clone)]
pub struct UpdateSettingsParam {
    pub school_name: String,
    pub contact_email: String,
    pub booking_window_days: i32,
    pub max_active_bookings: i32,
    pub registration_open: bool,
}
