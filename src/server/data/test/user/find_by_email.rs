use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("grace@example.edu")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("grace@example.edu").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests finding a user by an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.edu").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a stored role the application does not know is reported as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("Janitor")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email(&user.email).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
