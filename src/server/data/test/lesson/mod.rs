use crate::server::{
    data::lesson::LessonRepository,
    model::lesson::{CreateLessonParam, UpdateLessonParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_active_paginated;
mod update;

/// Builds a create parameter for one test lesson.
fn lesson_param(title: &str, active: bool) -> CreateLessonParam {
    CreateLessonParam {
        title: title.to_string(),
        description: "Basics of clutch control.".to_string(),
        price_cents: 4500,
        duration_minutes: 45,
        level: "BEGINNER".to_string(),
        active,
    }
}
