use super::*;

/// Tests creating an account stores all fields.
///
/// Expected: Ok(User) with the given email, name, and role
#[tokio::test]
async fn creates_account_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create(user_param("teacher@example.com", "Instructor", Role::Teacher))
        .await?;

    assert_eq!(user.email, "teacher@example.com");
    assert_eq!(user.name, "Instructor");
    assert_eq!(user.role, Role::Teacher);
    assert_eq!(user.password_hash, "stored-hash");

    Ok(())
}

/// Tests the unique email index rejects duplicates.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(user_param("dup@example.com", "First", Role::Student))
        .await?;

    let result = repo
        .create(user_param("dup@example.com", "Second", Role::Student))
        .await;

    assert!(result.is_err());

    Ok(())
}
