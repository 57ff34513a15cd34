use super::*;

/// Tests reading settings that were never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    let settings = repo.get().await?;

    assert!(settings.is_none());

    Ok(())
}

/// Tests reading back stored settings.
///
/// Expected: Ok(Some(AdminSettings)) with the stored values
#[tokio::test]
async fn returns_stored_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    repo.upsert(settings_param("Hill Start Academy")).await?;

    let settings = repo.get().await?.unwrap();

    assert_eq!(settings.school_name, "Hill Start Academy");
    assert_eq!(settings.booking_window_days, 21);
    assert_eq!(settings.max_active_bookings, 2);
    assert!(settings.registration_open);

    Ok(())
}
