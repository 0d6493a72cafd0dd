use super::*;

/// Tests creating an announcement.
///
/// Verifies that the author comes from the argument and the JSON list columns
/// round-trip through storage.
///
/// Expected: Ok with the created announcement
#[tokio::test]
async fn creates_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let repo = AnnouncementRepository::new(db);
    let announcement = repo.create(author.id, params("Library hours")).await?;

    assert_eq!(announcement.author_id, author.id);
    assert_eq!(announcement.priority, Priority::High);
    assert_eq!(
        announcement.target_audience,
        vec![Audience::Students, Audience::Faculty]
    );
    assert_eq!(announcement.attachments, vec!["hours.pdf".to_string()]);

    let stored = entity::prelude::Announcement::find_by_id(announcement.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating an announcement for an author that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let result = repo.create(999999, params("Orphan")).await;

    assert!(result.is_err());

    Ok(())
}
