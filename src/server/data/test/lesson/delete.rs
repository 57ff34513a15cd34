use super::*;

/// Tests deleting an existing lesson.
///
/// Expected: Ok(true) and the lesson is gone
#[tokio::test]
async fn deletes_existing_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let lesson = repo.create(lesson_param("Doomed", true)).await?;

    let deleted = repo.delete(lesson.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(lesson.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing lesson.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests a factory-built lesson is visible to the repository.
///
/// Keeps the factory and the repository conversion in agreement.
#[tokio::test]
async fn reads_factory_created_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::lesson::create_lesson(db).await?;

    let repo = LessonRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.title, created.title);
    assert!(found.active);

    Ok(())
}
