use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application settings returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminSettingsDto {
    pub school_name: String,
    pub contact_email: String,
    pub booking_window_days: i32,
    pub max_active_bookings: i32,
    pub registration_open: bool,
}

/// Request body for updating the application settings. All fields are replaced.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAdminSettingsDto {
    pub school_name: String,
    pub contact_email: String,
    pub booking_window_days: i32,
    pub max_active_bookings: i32,
    pub registration_open: bool,
}
