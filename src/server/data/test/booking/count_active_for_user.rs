use super::*;

/// Tests only pending and confirmed bookings count as active.
///
/// Expected: cancelled and completed bookings are excluded
#[tokio::test]
async fn counts_only_pending_and_confirmed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;

    for status in ["PENDING", "CONFIRMED", "CANCELLED", "COMPLETED"] {
        factory::booking::BookingFactory::new(db, user.id, lesson.id)
            .status(status)
            .build()
            .await?;
    }

    let count = BookingRepository::new(db)
        .count_active_for_user(user.id)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests the count is scoped to the given user.
///
/// Expected: other users' bookings don't count
#[tokio::test]
async fn scopes_count_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;

    factory::booking::create_booking(db, other.id, lesson.id).await?;

    let count = BookingRepository::new(db)
        .count_active_for_user(user.id)
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
