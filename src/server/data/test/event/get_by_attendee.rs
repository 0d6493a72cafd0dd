use super::*;

/// Tests listing the events a user registered for.
///
/// Expected: Ok with only the events the user attends
#[tokio::test]
async fn returns_only_attended_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;
    let attended = factory::create_event(db, organizer.id).await?;
    factory::create_event(db, organizer.id).await?;
    factory::add_attendee(db, attended.id, attendee.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_by_attendee(attendee.id).await?;
    let ids = repo.get_event_ids_by_attendee(attendee.id).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.id, attended.id);
    assert_eq!(ids, vec![attended.id]);

    Ok(())
}

/// Expected: Ok with an empty list for a user with no registrations
#[tokio::test]
async fn returns_empty_without_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _event) = factory::helpers::create_event_with_organizer(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.get_by_attendee(organizer.id).await?.is_empty());
    assert!(repo.get_event_ids_by_attendee(organizer.id).await?.is_empty());

    Ok(())
}
