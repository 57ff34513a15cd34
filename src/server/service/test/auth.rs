use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        service::auth::{
            password::{hash_password, verify_password},
            AuthService, RegisterUserParam,
        },
    },
};
use test_utils::builder::TestBuilder;

/// Tests hashing produces a verifiable PHC string, never the plain text.
#[test]
fn hash_verifies_and_hides_password() -> Result<(), AppError> {
    let hash = hash_password("correct horse battery staple")?;

    assert_ne!(hash, "correct horse battery staple");
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("correct horse battery staple", &hash));
    assert!(!verify_password("wrong password", &hash));

    Ok(())
}

/// Tests two hashes of the same password differ (per-password salt).
#[test]
fn hashes_are_salted() -> Result<(), AppError> {
    let first = hash_password("same input")?;
    let second = hash_password("same input")?;

    assert_ne!(first, second);

    Ok(())
}

/// Tests a corrupt stored hash denies sign-in instead of erroring open.
#[test]
fn corrupt_hash_never_verifies() {
    assert!(!verify_password("anything", "not-a-phc-string"));
}

/// Tests registration followed by sign-in with the same credentials.
///
/// Expected: Ok(User) with the student role
#[tokio::test]
async fn registers_and_signs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service
        .register(RegisterUserParam {
            name: "New Student".to_string(),
            email: "student@example.com".to_string(),
            password: "plaintext-secret".to_string(),
        })
        .await?;

    assert_eq!(registered.role, Role::Student);
    assert_ne!(registered.password_hash, "plaintext-secret");

    let signed_in = service
        .sign_in("student@example.com", "plaintext-secret")
        .await?;

    assert_eq!(signed_in.id, registered.id);

    Ok(())
}

/// Tests sign-in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(RegisterUserParam {
            name: "Student".to_string(),
            email: "student@example.com".to_string(),
            password: "right".to_string(),
        })
        .await?;

    let result = service.sign_in("student@example.com", "wrong").await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::InvalidCredentials)
    ));

    Ok(())
}

/// Tests sign-in with an unknown email uses the same error as a wrong
/// password, so responses never reveal which addresses are registered.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).sign_in("ghost@example.com", "any").await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::InvalidCredentials)
    ));

    Ok(())
}

/// Tests registration refuses an already-registered email.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let param = RegisterUserParam {
        name: "Student".to_string(),
        email: "taken@example.com".to_string(),
        password: "secret".to_string(),
    };
    service.register(param.clone()).await?;

    let result = service.register(param).await;

    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));

    Ok(())
}
