use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(string(Lesson::Title))
                    .col(text(Lesson::Description))
                    .col(integer(Lesson::PriceCents))
                    .col(integer(Lesson::DurationMinutes))
                    .col(string(Lesson::Level))
                    .col(boolean(Lesson::Active))
                    .col(timestamp_with_time_zone(Lesson::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    Title,
    Description,
    PriceCents,
    DurationMinutes,
    Level,
    Active,
    CreatedAt,
}
