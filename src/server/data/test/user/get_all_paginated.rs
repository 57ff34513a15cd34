use super::*;

/// Tests pagination splits accounts across pages in name order.
///
/// Expected: pages of the requested size, ordered alphabetically
#[tokio::test]
async fn paginates_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    for (email, name) in [
        ("c@example.com", "Carol"),
        ("a@example.com", "Alice"),
        ("b@example.com", "Bob"),
    ] {
        repo.create(user_param(email, name, Role::Student)).await?;
    }

    let (first_page, total, total_pages) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(total_pages, 2);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].name, "Alice");
    assert_eq!(first_page[1].name, "Bob");

    let (second_page, _, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Carol");

    Ok(())
}

/// Tests pagination over an empty table.
///
/// Expected: empty page, zero totals
#[tokio::test]
async fn returns_empty_page_for_no_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total, _) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
