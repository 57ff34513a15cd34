use super::*;

/// Tests the stale sweep cancels overdue pending bookings only.
///
/// Expected: past pending bookings cancelled; future and confirmed untouched
#[tokio::test]
async fn cancels_overdue_pending_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;

    let overdue_pending = factory::booking::BookingFactory::new(db, user.id, lesson.id)
        .scheduled_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let overdue_confirmed = factory::booking::BookingFactory::new(db, user.id, lesson.id)
        .scheduled_at(Utc::now() - Duration::hours(2))
        .status("CONFIRMED")
        .build()
        .await?;
    let future_pending = factory::booking::BookingFactory::new(db, user.id, lesson.id)
        .scheduled_at(Utc::now() + Duration::hours(2))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let cancelled = repo.cancel_stale_pending(Utc::now()).await?;

    assert_eq!(cancelled, 1);
    assert_eq!(
        repo.find_by_id(overdue_pending.id).await?.unwrap().status,
        BookingStatus::Cancelled
    );
    assert_eq!(
        repo.find_by_id(overdue_confirmed.id).await?.unwrap().status,
        BookingStatus::Confirmed
    );
    assert_eq!(
        repo.find_by_id(future_pending.id).await?.unwrap().status,
        BookingStatus::Pending
    );

    Ok(())
}

/// Tests the sweep over an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn does_nothing_without_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cancelled = BookingRepository::new(db)
        .cancel_stale_pending(Utc::now())
        .await?;

    assert_eq!(cancelled, 0);

    Ok(())
}
