use super::*;

/// Tests empty permission list grants access to any signed-in account.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create student user
    let user = factory::user::UserFactory::new(db).build().await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check with empty permissions list
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);

    Ok(())
}

/// Tests empty permission list still requires a session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn empty_permission_list_requires_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests an account with unknown role text is treated as a student.
///
/// Unknown role text parses to the default role, so the guard returns the
/// account but staff permissions are denied.
///
/// Expected: Ok(User) for no permissions, Err(AccessDenied) for admin
#[tokio::test]
async fn unknown_role_text_behaves_as_student() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("SUPERUSER")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);

    let loaded = auth_guard.require(&[]).await?;
    assert_eq!(loaded.role, crate::model::user::Role::Student);

    let result = auth_guard.require(&[Permission::Admin]).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}
