use sea_orm::entity::prelude::*;

/// Application-wide settings. A single row (id = 1) is maintained.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_setting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_name: String,
    pub contact_email: String,
    pub booking_window_days: i32,
    pub max_active_bookings: i32,
    pub registration_open: bool,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
