use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: Role::Faculty,
        department: Some("Mathematics".to_string()),
        year: None,
    }
}

/// Tests creating a user.
///
/// Verifies that the repository stores every submitted field and starts the user
/// with empty notification preferences.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.edu")).await?;

    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.edu");
    assert_eq!(user.role, Role::Faculty);
    assert_eq!(user.department.as_deref(), Some("Mathematics"));
    assert_eq!(user.notification_preferences, serde_json::json!({}));

    Ok(())
}

/// Tests the unique email index.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.edu")).await?;
    let result = repo.create(params("dup@example.edu")).await;

    assert!(result.is_err());

    Ok(())
}
