pub use sea_orm_migration::prelude::*;

mod m20260501_000001_create_user_table;
mod m20260501_000002_create_lesson_table;
mod m20260501_000003_create_booking_table;
mod m20260501_000004_create_admin_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260501_000001_create_user_table::Migration),
            Box::new(m20260501_000002_create_lesson_table::Migration),
            Box::new(m20260501_000003_create_booking_table::Migration),
            Box::new(m20260501_000004_create_admin_setting_table::Migration),
        ]
    }
}
