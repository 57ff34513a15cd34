//! Booking domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, BookingStatus, PaginatedBookingsDto},
    server::error::{internal::InternalError, AppError},
};

/// A student's reservation of a lesson slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub lesson_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts the booking domain model to a DTO for API responses.
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            lesson_id: self.lesson_id,
            scheduled_at: self.scheduled_at,
            status: self.status,
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// Bookings are only written through `BookingStatus`, so unknown status
    /// text means the row was modified out of band and the conversion fails.
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let status = BookingStatus::from_db(&entity.status).ok_or_else(|| {
            InternalError::UnknownBookingStatus {
                id: entity.id,
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            lesson_id: entity.lesson_id,
            scheduled_at: entity.scheduled_at,
            status,
            notes: entity.notes,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for booking a lesson.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub user_id: i32,
    pub lesson_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Paginated collection of bookings with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBookings {
    pub bookings: Vec<Booking>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBookings {
    /// Converts the paginated bookings domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedBookingsDto {
        let bookings = self.bookings.into_iter().map(|b| b.into_dto()).collect();

        PaginatedBookingsDto {
            bookings,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
