use super::*;
use crate::server::model::user::User;

async fn load(db: &sea_orm::DatabaseConnection, role: &str) -> Result<User, AppError> {
    let entity = factory::user::UserFactory::new(db).role(role).build().await?;

    Ok(User::from_entity(entity)?)
}

/// Tests that an admin may modify someone else's announcement.
#[tokio::test]
async fn admin_passes_announcement_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = load(db, "Faculty").await?;
    let admin = load(db, "Admin").await?;

    assert!(Permission::AnnouncementAuthor(author.id).check(&admin).is_ok());
    assert!(Permission::AnnouncementAuthor(author.id).check(&author).is_ok());

    Ok(())
}

/// Tests that a student who is not the author is denied.
///
/// Expected: Err(AuthError::AccessDenied) with the announcement message
#[tokio::test]
async fn other_user_fails_announcement_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = load(db, "Faculty").await?;
    let student = load(db, "Student").await?;

    let result = Permission::AnnouncementAuthor(author.id).check(&student);

    assert!(matches!(
        result,
        Err(AuthError::AccessDenied(_, ref message))
            if message == "Not authorized to modify this announcement"
    ));

    Ok(())
}

/// Tests that admins get no override on events.
///
/// Expected: Err(AuthError::AccessDenied) for the admin, Ok for the organizer
#[tokio::test]
async fn admin_fails_event_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = load(db, "Staff").await?;
    let admin = load(db, "Admin").await?;

    assert!(matches!(
        Permission::EventOrganizer(organizer.id).check(&admin),
        Err(AuthError::AccessDenied(_, _))
    ));
    assert!(Permission::EventOrganizer(organizer.id).check(&organizer).is_ok());

    Ok(())
}
