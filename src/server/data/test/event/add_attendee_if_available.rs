use super::*;

/// Tests registering for an event with room.
///
/// Expected: Ok(true) and the user is an attendee
#[tokio::test]
async fn inserts_when_slot_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, organizer.id)
        .max_attendees(Some(2))
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.add_attendee_if_available(event.id, user.id).await?);
    assert!(repo.get_by_id(event.id).await?.unwrap().is_attendee(user.id));
    assert_eq!(repo.count_attendees(event.id).await?, 1);

    Ok(())
}

/// Tests that a second registration by the same user inserts nothing.
///
/// Expected: Ok(false) with a single attendee row
#[tokio::test]
async fn skips_duplicate_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = factory::helpers::create_event_with_organizer(db).await?;
    let user = factory::create_user(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.add_attendee_if_available(event.id, user.id).await?);
    assert!(!repo.add_attendee_if_available(event.id, user.id).await?);
    assert_eq!(repo.count_attendees(event.id).await?, 1);

    Ok(())
}

/// Tests that a full event accepts no further attendees.
///
/// Expected: Ok(false) and the attendee count stays at capacity
#[tokio::test]
async fn skips_when_event_full() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, organizer.id)
        .max_attendees(Some(1))
        .build()
        .await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.add_attendee_if_available(event.id, first.id).await?);
    assert!(!repo.add_attendee_if_available(event.id, second.id).await?);
    assert!(!repo.get_by_id(event.id).await?.unwrap().is_attendee(second.id));
    assert_eq!(repo.count_attendees(event.id).await?, 1);

    Ok(())
}

/// Tests that an unbounded event keeps accepting attendees.
#[tokio::test]
async fn accepts_many_without_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = factory::helpers::create_event_with_organizer(db).await?;

    let repo = EventRepository::new(db);
    for _ in 0..5 {
        let user = factory::create_user(db).await?;
        assert!(repo.add_attendee_if_available(event.id, user.id).await?);
    }

    assert_eq!(repo.count_attendees(event.id).await?, 5);

    Ok(())
}

/// Expected: Ok(false) for an event that does not exist
#[tokio::test]
async fn skips_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = EventRepository::new(db);

    assert!(!repo.add_attendee_if_available(999999, user.id).await?);

    Ok(())
}
