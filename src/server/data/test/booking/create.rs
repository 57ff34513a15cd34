use super::*;

/// Tests creating a booking starts it in the pending state.
///
/// Expected: Ok(Booking) with status Pending and the given fields
#[tokio::test]
async fn creates_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let lesson = factory::lesson::create_lesson(db).await?;

    let scheduled_at = Utc::now() + Duration::days(2);
    let booking = BookingRepository::new(db)
        .create(CreateBookingParam {
            user_id: user.id,
            lesson_id: lesson.id,
            scheduled_at,
            notes: Some("First time on the motorway".to_string()),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.lesson_id, lesson.id);
    assert_eq!(booking.scheduled_at, scheduled_at);
    assert_eq!(booking.notes.as_deref(), Some("First time on the motorway"));

    Ok(())
}

/// Tests reading back a created booking by id.
///
/// Expected: Ok(Some(Booking)) equal to the created one
#[tokio::test]
async fn finds_created_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.status, BookingStatus::Pending);

    Ok(())
}
