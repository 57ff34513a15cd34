use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminSetting::Id))
                    .col(string(AdminSetting::SchoolName))
                    .col(string(AdminSetting::ContactEmail))
                    .col(integer(AdminSetting::BookingWindowDays))
                    .col(integer(AdminSetting::MaxActiveBookings))
                    .col(boolean(AdminSetting::RegistrationOpen))
                    .col(timestamp_with_time_zone(AdminSetting::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminSetting {
    Table,
    Id,
    SchoolName,
    ContactEmail,
    BookingWindowDays,
    MaxActiveBookings,
    RegistrationOpen,
    UpdatedAt,
}
