//! Booking service: booking creation rules and the status state machine.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{booking::BookingStatus, user::Role},
    server::{
        data::{booking::BookingRepository, lesson::LessonRepository},
        error::AppError,
        model::{
            booking::{Booking, CreateBookingParam, PaginatedBookings},
            user::User,
        },
        service::settings::SettingsService,
    },
};

/// Service providing business logic for bookings.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a lesson for a student.
    ///
    /// Enforces the booking rules from the application settings: the lesson
    /// must be active, the slot must lie in the future and inside the booking
    /// window, and the student must be under the active-booking cap.
    ///
    /// # Arguments
    /// - `param` - Booking data including the acting user's id
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created pending booking
    /// - `Err(AppError::NotFound)` - Lesson missing or inactive
    /// - `Err(AppError::BadRequest)` - A booking rule was violated
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        let settings = SettingsService::new(self.db).get().await?;

        let lesson = LessonRepository::new(self.db)
            .find_by_id(param.lesson_id)
            .await?;
        match lesson {
            Some(lesson) if lesson.active => {}
            _ => return Err(AppError::NotFound("Lesson not found".to_string())),
        }

        let now = Utc::now();
        if param.scheduled_at <= now {
            return Err(AppError::BadRequest(
                "Booking time must be in the future".to_string(),
            ));
        }
        if param.scheduled_at > now + Duration::days(settings.booking_window_days as i64) {
            return Err(AppError::BadRequest(format!(
                "Bookings can be made at most {} days in advance",
                settings.booking_window_days
            )));
        }

        let booking_repo = BookingRepository::new(self.db);
        let active = booking_repo.count_active_for_user(param.user_id).await?;
        if active >= settings.max_active_bookings as u64 {
            return Err(AppError::BadRequest(format!(
                "You already have {} open bookings; cancel one first",
                active
            )));
        }

        booking_repo.create(param).await
    }

    /// Lists bookings visible to the requester.
    ///
    /// Students see their own bookings; teachers and admins see everyone's.
    ///
    /// # Arguments
    /// - `requester` - The acting account
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of bookings per page
    ///
    /// # Returns
    /// - `Ok(PaginatedBookings)` - Visible bookings with pagination metadata
    /// - `Err(AppError)` - Database error during query
    pub async fn get_for_requester(
        &self,
        requester: &User,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBookings, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let (bookings, total, total_pages) = match requester.role {
            Role::Admin | Role::Teacher => booking_repo.get_all_paginated(page, per_page).await?,
            Role::Student => {
                booking_repo
                    .get_for_user_paginated(requester.id, page, per_page)
                    .await?
            }
        };

        Ok(PaginatedBookings {
            bookings,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Moves a booking to a new status.
    ///
    /// Only the transitions of the booking state machine are accepted:
    /// pending bookings can be confirmed or cancelled, confirmed ones
    /// completed or cancelled, and terminal states never change.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking in its new status
    /// - `Err(AppError::NotFound)` - No booking with that id
    /// - `Err(AppError::BadRequest)` - Transition not allowed
    pub async fn update_status(
        &self,
        booking_id: i32,
        next: BookingStatus,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        if !booking.status.can_transition_to(next) {
            return Err(AppError::BadRequest(format!(
                "A {} booking cannot be moved to {}",
                booking.status.as_str(),
                next.as_str()
            )));
        }

        booking_repo.set_status(booking_id, next).await?;

        Ok(Booking {
            status: next,
            ..booking
        })
    }

    /// Cancels a booking on behalf of the requester.
    ///
    /// Students may only cancel their own bookings; a foreign booking id
    /// reads as not found so booking ids of other students are never
    /// confirmed. Teachers and admins may cancel any booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The cancelled booking
    /// - `Err(AppError::NotFound)` - No such booking visible to the requester
    /// - `Err(AppError::BadRequest)` - Booking already finalized
    pub async fn cancel(&self, booking_id: i32, requester: &User) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        if requester.role == Role::Student && booking.user_id != requester.id {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        if booking.status.is_terminal() {
            return Err(AppError::BadRequest(
                "Booking is already finalized".to_string(),
            ));
        }

        booking_repo
            .set_status(booking_id, BookingStatus::Cancelled)
            .await?;

        Ok(Booking {
            status: BookingStatus::Cancelled,
            ..booking
        })
    }
}
