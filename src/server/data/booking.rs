//! Booking data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::booking::BookingStatus,
    server::{
        error::AppError,
        model::booking::{Booking, CreateBookingParam},
    },
};

/// Repository providing database operations for bookings.
///
/// Conversions go through `Booking::from_entity`, which validates the stored
/// status text, so most reads return `AppError` rather than bare `DbErr`.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking in the `Pending` state.
    ///
    /// # Arguments
    /// - `param` - Booking data
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            lesson_id: ActiveValue::Set(param.lesson_id),
            scheduled_at: ActiveValue::Set(param.scheduled_at),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    /// Finds a booking by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that id
    /// - `Err(AppError)` - Database error during query or corrupt status text
    pub async fn find_by_id(&self, booking_id: i32) -> Result<Option<Booking>, AppError> {
        let entity = entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await?;

        entity.map(Booking::from_entity).transpose()
    }

    /// Gets one user's bookings with pagination, most recent schedule first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the bookings
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of bookings per page
    ///
    /// # Returns
    /// - `Ok((bookings, total_items, total_pages))` - Bookings for the page plus counts
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_for_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Booking>, u64, u64), AppError> {
        let paginator = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::ScheduledAt)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let bookings = entities
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bookings, counts.number_of_items, counts.number_of_pages))
    }

    /// Gets all bookings with pagination, most recent schedule first.
    ///
    /// Used by teacher and admin views.
    ///
    /// # Returns
    /// - `Ok((bookings, total_items, total_pages))` - Bookings for the page plus counts
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Booking>, u64, u64), AppError> {
        let paginator = entity::prelude::Booking::find()
            .order_by_desc(entity::booking::Column::ScheduledAt)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let bookings = entities
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bookings, counts.number_of_items, counts.number_of_pages))
    }

    /// Counts a user's bookings in an active (pending or confirmed) state.
    ///
    /// Backs the per-student booking cap.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of active bookings
    /// - `Err(AppError)` - Database error during count query
    pub async fn count_active_for_user(&self, user_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.is_in([
                BookingStatus::Pending.as_str(),
                BookingStatus::Confirmed.as_str(),
            ]))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Counts bookings referencing a lesson.
    ///
    /// Used to refuse deleting a lesson with booking history.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bookings for the lesson
    /// - `Err(AppError)` - Database error during count query
    pub async fn count_for_lesson(&self, lesson_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::LessonId.eq(lesson_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Stores a new status for a booking.
    ///
    /// Transition legality is the service layer's concern; this is a plain
    /// column update.
    ///
    /// # Returns
    /// - `Ok(())` - Status stored (or no matching booking)
    /// - `Err(AppError)` - Database error during update operation
    pub async fn set_status(&self, booking_id: i32, status: BookingStatus) -> Result<(), AppError> {
        entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Id.eq(booking_id))
            .col_expr(
                entity::booking::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Cancels pending bookings whose scheduled time has already passed.
    ///
    /// Run by the maintenance scheduler so stale requests stop counting
    /// against the student's active booking cap.
    ///
    /// # Arguments
    /// - `now` - Cutoff time; pending bookings scheduled before it are cancelled
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bookings cancelled
    /// - `Err(AppError)` - Database error during update operation
    pub async fn cancel_stale_pending(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Pending.as_str()))
            .filter(entity::booking::Column::ScheduledAt.lt(now))
            .col_expr(
                entity::booking::Column::Status,
                sea_orm::sea_query::Expr::value(BookingStatus::Cancelled.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
