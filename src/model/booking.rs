use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a booking.
///
/// Allowed transitions: `Pending` → `Confirmed` or `Cancelled`; `Confirmed` →
/// `Completed` or `Cancelled`. `Cancelled` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// The database text for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    /// Parses database text into a status.
    ///
    /// Unlike roles there is no safe fallback for an unknown status, so the
    /// caller decides how to surface `None`.
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(BookingStatus::Pending),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            "COMPLETED" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// Whether a booking may move from this status to `next`.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    /// Whether this status counts against a student's active booking cap.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Whether this status is final.
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

/// Booking details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub lesson_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Paginated collection of bookings with navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for booking a lesson.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub lesson_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Request body for moving a booking to a new status.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}
