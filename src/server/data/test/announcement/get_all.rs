use super::*;

/// Tests that announcements are listed newest first.
///
/// Expected: Ok with announcements ordered by creation time descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();
    let oldest = factory::announcement::AnnouncementFactory::new(db, author.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::announcement::AnnouncementFactory::new(db, author.id)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::announcement::AnnouncementFactory::new(db, author.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let ids: Vec<i32> = repo
        .get_all(None)
        .await?
        .into_iter()
        .map(|a| a.announcement.id)
        .collect();

    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests filtering announcements by priority.
///
/// Expected: Ok with only the high priority announcements
#[tokio::test]
async fn filters_by_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let high = factory::announcement::AnnouncementFactory::new(db, author.id)
        .priority("High")
        .build()
        .await?;
    factory::announcement::AnnouncementFactory::new(db, author.id)
        .priority("Low")
        .build()
        .await?;
    factory::create_announcement(db, author.id).await?;

    let repo = AnnouncementRepository::new(db);
    let results = repo.get_all(Some(Priority::High)).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].announcement.id, high.id);
    assert_eq!(results[0].announcement.priority, Priority::High);

    Ok(())
}

/// Expected: Ok with an empty list when nothing matches the filter
#[tokio::test]
async fn returns_empty_for_unused_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::create_announcement(db, author.id).await?;

    let repo = AnnouncementRepository::new(db);
    let results = repo.get_all(Some(Priority::Low)).await?;

    assert!(results.is_empty());

    Ok(())
}
