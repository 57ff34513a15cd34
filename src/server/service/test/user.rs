use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::user::{GetAllUsersParam, SetRoleParam},
        service::user::UserService,
    },
};
use test_utils::{builder::TestBuilder, factory};

/// Tests promoting a student works and is visible in the listing.
#[tokio::test]
async fn promotes_student_to_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let updated = service
        .set_role(SetRoleParam {
            user_id: student.id,
            role: Role::Teacher,
        })
        .await?;

    assert_eq!(updated.role, Role::Teacher);

    let listed = service
        .get_all_users(GetAllUsersParam {
            page: 0,
            per_page: 10,
        })
        .await?;
    assert_eq!(listed.users[0].role, Role::Teacher);

    Ok(())
}

/// Tests demoting the only admin is refused.
///
/// Expected: Err(AppError::Conflict) and the role unchanged
#[tokio::test]
async fn refuses_demoting_last_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "ADMIN").await?;

    let result = UserService::new(db)
        .set_role(SetRoleParam {
            user_id: admin.id,
            role: Role::Student,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    Ok(())
}

/// Tests demotion works while another admin remains.
#[tokio::test]
async fn allows_demotion_with_remaining_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user_with_role(db, "ADMIN").await?;
    factory::user::create_user_with_role(db, "ADMIN").await?;

    let updated = UserService::new(db)
        .set_role(SetRoleParam {
            user_id: first.id,
            role: Role::Teacher,
        })
        .await?;

    assert_eq!(updated.role, Role::Teacher);

    Ok(())
}

/// Tests changing the role of a missing account.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .set_role(SetRoleParam {
            user_id: 4242,
            role: Role::Teacher,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));

    Ok(())
}
