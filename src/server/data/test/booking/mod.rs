use crate::{
    model::booking::BookingStatus,
    server::{data::booking::BookingRepository, error::AppError, model::booking::CreateBookingParam},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod cancel_stale_pending;
mod count_active_for_user;
mod create;
mod set_status;
