use super::*;

/// Tests teacher user passes the teacher permission check.
///
/// Expected: Ok(User) with role Teacher
#[tokio::test]
async fn grants_access_to_teacher_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("TEACHER")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Teacher]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().role, crate::model::user::Role::Teacher);

    Ok(())
}

/// Tests admin user passes the teacher permission check.
///
/// Admins hold every staff permission, so the teacher check must not
/// exclude them.
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

    let user = factory::user::UserFactory::new(db)
        .role("ADMIN")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Teacher]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests student user is denied the teacher permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_student_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("STUDENT")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Teacher]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("teacher"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
