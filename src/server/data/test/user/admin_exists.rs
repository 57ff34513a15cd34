use super::*;

/// Tests detecting when admin accounts exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(user_param("admin@example.com", "AdminUser", Role::Admin))
        .await?;

    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when no admin accounts exist.
///
/// Verifies the repository returns false on an empty table, the
/// first-run setup scenario.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_no_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests detecting when only non-admin accounts exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(user_param("student@example.com", "Student", Role::Student))
        .await?;
    repo.create(user_param("teacher@example.com", "Teacher", Role::Teacher))
        .await?;

    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
