//! Lesson data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::lesson::{CreateLessonParam, Lesson, UpdateLessonParam};

/// Repository providing database operations for the lessons catalog.
pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    /// Creates a new LessonRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new lesson.
    ///
    /// # Arguments
    /// - `param` - Lesson data
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The created lesson
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateLessonParam) -> Result<Lesson, DbErr> {
        let entity = entity::lesson::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            price_cents: ActiveValue::Set(param.price_cents),
            duration_minutes: ActiveValue::Set(param.duration_minutes),
            level: ActiveValue::Set(param.level),
            active: ActiveValue::Set(param.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(entity))
    }

    /// Finds a lesson by its primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Lesson))` - Lesson found
    /// - `Ok(None)` - No lesson with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, lesson_id: i32) -> Result<Option<Lesson>, DbErr> {
        let entity = entity::prelude::Lesson::find_by_id(lesson_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Lesson::from_entity))
    }

    /// Gets active lessons with pagination, ordered alphabetically by title.
    ///
    /// Inactive lessons are excluded; this is the public catalog query.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of lessons per page
    ///
    /// # Returns
    /// - `Ok((lessons, total_items, total_pages))` - Lessons for the page plus counts
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Lesson>, u64, u64), DbErr> {
        let paginator = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::Active.eq(true))
            .order_by_asc(entity::lesson::Column::Title)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let lessons = entities.into_iter().map(Lesson::from_entity).collect();

        Ok((lessons, counts.number_of_items, counts.number_of_pages))
    }

    /// Replaces all fields of a lesson.
    ///
    /// # Arguments
    /// - `param` - Lesson data including the id to update
    ///
    /// # Returns
    /// - `Ok(Some(Lesson))` - The updated lesson
    /// - `Ok(None)` - No lesson with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateLessonParam) -> Result<Option<Lesson>, DbErr> {
        let Some(model) = entity::prelude::Lesson::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.title = ActiveValue::Set(param.title);
        active_model.description = ActiveValue::Set(param.description);
        active_model.price_cents = ActiveValue::Set(param.price_cents);
        active_model.duration_minutes = ActiveValue::Set(param.duration_minutes);
        active_model.level = ActiveValue::Set(param.level);
        active_model.active = ActiveValue::Set(param.active);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Lesson::from_entity(entity)))
    }

    /// Deletes a lesson.
    ///
    /// # Returns
    /// - `Ok(true)` - Lesson deleted
    /// - `Ok(false)` - No lesson with that id
    /// - `Err(DbErr)` - Database error during delete (including foreign key violations)
    pub async fn delete(&self, lesson_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Lesson::delete_by_id(lesson_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
