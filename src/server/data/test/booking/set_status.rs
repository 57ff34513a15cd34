use super::*;

/// Tests storing a new booking status.
///
/// Expected: Ok(()) and the stored status changes
#[tokio::test]
async fn stores_new_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    repo.set_status(booking.id, BookingStatus::Confirmed).await?;

    let reloaded = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(reloaded.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests a booking with corrupt status text fails conversion.
///
/// Rows are only written through `BookingStatus`; anything else is flagged
/// as an internal error rather than silently coerced.
///
/// Expected: Err on read
#[tokio::test]
async fn rejects_corrupt_status_text() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;
    let corrupt = factory::booking::BookingFactory::new(db, user.id, lesson.id)
        .status("ON-HOLD")
        .build()
        .await?;

    let result = BookingRepository::new(db).find_by_id(corrupt.id).await;

    assert!(result.is_err());

    Ok(())
}
