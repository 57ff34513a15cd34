use super::*;

/// Tests the catalog query returns only active lessons.
///
/// Expected: inactive lessons excluded from results and counts
#[tokio::test]
async fn excludes_inactive_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    repo.create(lesson_param("Motorway driving", true)).await?;
    repo.create(lesson_param("Night driving", false)).await?;

    let (lessons, total, _) = repo.get_active_paginated(0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].title, "Motorway driving");

    Ok(())
}

/// Tests catalog ordering and page split.
///
/// Expected: title order, page size respected
#[tokio::test]
async fn orders_by_title_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lesson)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LessonRepository::new(db);
    for title in ["Parking", "City traffic", "Reversing"] {
        repo.create(lesson_param(title, true)).await?;
    }

    let (first_page, total, total_pages) = repo.get_active_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(total_pages, 2);
    assert_eq!(first_page[0].title, "City traffic");
    assert_eq!(first_page[1].title, "Parking");

    Ok(())
}
