use super::*;

/// Tests getting an announcement with its author populated.
///
/// Expected: Ok(Some) with author id, name and email
#[tokio::test]
async fn returns_announcement_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, announcement) = factory::helpers::create_announcement_with_author(db).await?;

    let repo = AnnouncementRepository::new(db);
    let result = repo.get_by_id(announcement.id).await?.unwrap();

    assert_eq!(result.announcement.title, announcement.title);
    assert_eq!(result.author.id, author.id);
    assert_eq!(result.author.name, author.name);
    assert_eq!(result.author.email, author.email);

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
    let result = repo.get_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}
