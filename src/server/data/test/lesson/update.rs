use super::*;

/// Tests replacing all fields of a lesson.
///
/// Expected: Ok(Some(Lesson)) with the new values
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let lesson = repo.create(lesson_param("Old title", true)).await?;

    let updated = repo
        .update(UpdateLessonParam {
            id: lesson.id,
            title: "New title".to_string(),
            description: "Updated description.".to_string(),
            price_cents: 6000,
            duration_minutes: 90,
            level: "ADVANCED".to_string(),
            active: false,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.price_cents, 6000);
    assert_eq!(updated.duration_minutes, 90);
    assert_eq!(updated.level, "ADVANCED");
    assert!(!updated.active);

    Ok(())
}

/// Tests updating a missing lesson.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let result = repo
        .update(UpdateLessonParam {
            id: 4242,
            title: "Ghost".to_string(),
            description: String::new(),
            price_cents: 0,
            duration_minutes: 30,
            level: "BEGINNER".to_string(),
            active: true,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
