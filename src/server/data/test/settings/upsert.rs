use super::*;

/// Tests the first upsert inserts the settings row.
///
/// Expected: Ok(AdminSettings) with the given values
#[tokio::test]
async fn inserts_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    let stored = repo.upsert(settings_param("First School")).await?;

    assert_eq!(stored.school_name, "First School");

    Ok(())
}

/// Tests a second upsert replaces the single row instead of adding one.
///
/// Expected: the stored row carries the latest values
#[tokio::test]
async fn replaces_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    repo.upsert(settings_param("Before")).await?;

    let mut param = settings_param("After");
    param.registration_open = false;
    param.booking_window_days = 60;
    repo.upsert(param).await?;

    let settings = repo.get().await?.unwrap();
    assert_eq!(settings.school_name, "After");
    assert_eq!(settings.booking_window_days, 60);
    assert!(!settings.registration_open);

    Ok(())
}
