use sea_orm_migration::{prelude::*, schema::*};

use super::m20260501_000001_create_user_table::User;
use super::m20260501_000002_create_lesson_table::Lesson;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::LessonId))
                    .col(timestamp_with_time_zone(Booking::ScheduledAt))
                    .col(string(Booking::Status))
                    .col(string_null(Booking::Notes))
                    .col(timestamp_with_time_zone(Booking::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_lesson")
                            .from(Booking::Table, Booking::LessonId)
                            .to(Lesson::Table, Lesson::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    LessonId,
    ScheduledAt,
    Status,
    Notes,
    CreatedAt,
}
