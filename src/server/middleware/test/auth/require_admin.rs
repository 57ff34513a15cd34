use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the user is authenticated,
/// exists in the database, and has the admin role.
///
/// Expected: Ok(User) with role Admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create admin user
    let user = factory::user::UserFactory::new(db)
        .name("AdminUser")
        .role("ADMIN")
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check admin permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.name, "AdminUser");
    assert_eq!(returned_user.role, crate::model::user::Role::Admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when the user is authenticated,
/// exists in the database, but lacks the admin role.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create student user
    let user = factory::user::UserFactory::new(db)
        .name("RegularUser")
        .role("STUDENT")
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check admin permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests unauthenticated user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when there is no user ID
/// in the session (user not signed in).
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Don't set user in session - simulate unauthenticated request

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests user in session but not in database is denied.
///
/// Verifies that the AuthGuard denies access when the user ID exists in
/// the session but the user record does not exist in the database.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Set user ID in session without creating user in database
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(999_999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 999_999);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}
