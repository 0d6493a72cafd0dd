use super::*;

/// Tests deleting an announcement.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, announcement) = factory::helpers::create_announcement_with_author(db).await?;

    let repo = AnnouncementRepository::new(db);
    let deleted = repo.delete(announcement.id).await?;

    assert!(deleted);
    let check = entity::prelude::Announcement::find_by_id(announcement.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting an announcement that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let deleted = repo.delete(999999).await?;

    assert!(!deleted);

    Ok(())
}
