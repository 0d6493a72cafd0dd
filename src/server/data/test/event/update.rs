use super::*;

/// Tests replacing an event's content.
///
/// Expected: Ok(true) with the new fields stored and the organizer unchanged
#[tokio::test]
async fn replaces_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, event) = factory::helpers::create_event_with_organizer(db).await?;

    let repo = EventRepository::new(db);
    let mut update = params("Renamed", None);
    update.category = EventCategory::Social;
    let updated = repo.update(event.id, update).await?;

    assert!(updated);
    let loaded = repo.get_by_id(event.id).await?.unwrap();
    assert_eq!(loaded.event.title, "Renamed");
    assert_eq!(loaded.event.category, EventCategory::Social);
    assert_eq!(loaded.event.organizer_id, organizer.id);

    Ok(())
}

/// Tests that capacity cannot drop below the current attendee count.
///
/// Verifies that the guarded update leaves the row untouched when two users are
/// registered and the new capacity is one, but accepts a capacity of two.
///
/// Expected: Ok(false) then Ok(true)
#[tokio::test]
async fn refuses_capacity_below_attendee_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = factory::helpers::create_event_with_organizer(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::add_attendee(db, event.id, first.id).await?;
    factory::add_attendee(db, event.id, second.id).await?;

    let repo = EventRepository::new(db);

    assert!(!repo.update(event.id, params("Too small", Some(1))).await?);
    let unchanged = repo.get_by_id(event.id).await?.unwrap();
    assert_eq!(unchanged.event.title, event.title);
    assert_eq!(unchanged.event.max_attendees, None);

    assert!(repo.update(event.id, params("Exact fit", Some(2))).await?);
    let updated = repo.get_by_id(event.id).await?.unwrap();
    assert_eq!(updated.event.max_attendees, Some(2));

    Ok(())
}

/// Expected: Ok(false) for an id that does not exist
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(!repo.update(999999, params("Nothing", None)).await?);

    Ok(())
}
