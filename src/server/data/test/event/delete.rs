use super::*;

/// Tests deleting an event together with its attendee rows.
///
/// Expected: Ok(true) with no event row and no attendee rows left
#[tokio::test]
async fn deletes_event_and_attendees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = factory::helpers::create_event_with_organizer(db).await?;
    let attendee = factory::create_user(db).await?;
    factory::add_attendee(db, event.id, attendee.id).await?;

    let repo = EventRepository::new(db);
    let deleted = repo.delete(event.id).await?;

    assert!(deleted);
    let check = entity::prelude::Event::find_by_id(event.id).one(db).await?;
    assert!(check.is_none());

    let attendee_rows = entity::prelude::EventAttendee::find()
        .filter(entity::event_attendee::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    assert_eq!(attendee_rows, 0);

    Ok(())
}

/// Tests deleting an event that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(!repo.delete(999999).await?);

    Ok(())
}
