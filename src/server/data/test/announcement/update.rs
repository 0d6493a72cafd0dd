use super::*;

/// Tests replacing an announcement's content.
///
/// Verifies that the submitted record replaces the stored one while the author
/// stays as it was.
///
/// Expected: Ok(Some) with the new content
#[tokio::test]
async fn replaces_content_and_keeps_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, announcement) = factory::helpers::create_announcement_with_author(db).await?;
    let expires_at = Utc::now() + Duration::days(30);

    let repo = AnnouncementRepository::new(db);
    let mut update = params("Updated title");
    update.expires_at = Some(expires_at);
    let updated = repo.update(announcement.id, update).await?.unwrap();

    assert_eq!(updated.title, "Updated title");
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.author_id, author.id);
    assert!(updated.expires_at.is_some());

    Ok(())
}

/// Expected: Ok(None) for an id that does not exist
#[tokio::test]
async fn returns_none_for_missing_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let result = repo.update(999999, params("Nothing")).await?;

    assert!(result.is_none());

    Ok(())
}
