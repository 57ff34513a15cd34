use super::*;

/// Tests finding an account by its email address.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(user_param("driver@example.com", "Driver", Role::Student))
        .await?;

    let found = repo.find_by_email("driver@example.com").await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests lookup by an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests email matching is exact.
///
/// Expected: Ok(None) for a case variant of a stored address
#[tokio::test]
async fn matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(user_param("exact@example.com", "Exact", Role::Student))
        .await?;

    let found = repo.find_by_email("EXACT@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
