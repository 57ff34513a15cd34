use super::*;

/// Tests promoting a student to teacher.
///
/// Expected: Ok(()) and the stored role changes
#[tokio::test]
async fn changes_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(user_param("student@example.com", "Student", Role::Student))
        .await?;

    repo.set_role(user.id, Role::Teacher).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.role, Role::Teacher);

    Ok(())
}

/// Tests setting a role for a missing account is a no-op.
///
/// Expected: Ok(()) with no rows changed
#[tokio::test]
async fn ignores_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_role(424_242, Role::Admin).await;

    assert!(result.is_ok());
    assert!(!repo.admin_exists().await?);

    Ok(())
}
