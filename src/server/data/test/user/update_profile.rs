use super::*;

/// Tests updating only some profile fields.
///
/// Verifies that fields absent from the params keep their stored values.
///
/// Expected: Ok(Some) with name and year changed, department untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .department("Physics")
        .year(1)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                name: Some("Renamed".to_string()),
                department: None,
                year: Some(2),
                notification_preferences: Some(serde_json::json!({ "email": false })),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.year, Some(2));
    assert_eq!(updated.department.as_deref(), Some("Physics"));
    assert_eq!(
        updated.notification_preferences,
        serde_json::json!({ "email": false })
    );
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests an update with no fields present.
///
/// Expected: Ok(Some) with the user unchanged
#[tokio::test]
async fn empty_update_leaves_user_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams::default(),
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, user.name);

    Ok(())
}

/// Expected: Ok(None) for a user id that does not exist
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(
            999999,
            UpdateProfileParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
