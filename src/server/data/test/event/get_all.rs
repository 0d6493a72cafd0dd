use super::*;

/// Tests that events are listed by date ascending.
///
/// Expected: Ok with the earliest event first
#[tokio::test]
async fn orders_by_date_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let now = Utc::now();
    let late = factory::event::EventFactory::new(db, organizer.id)
        .date(now + Duration::days(10))
        .build()
        .await?;
    let early = factory::event::EventFactory::new(db, organizer.id)
        .date(now + Duration::days(1))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let ids: Vec<i32> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|e| e.event.id)
        .collect();

    assert_eq!(ids, vec![early.id, late.id]);

    Ok(())
}

/// Tests that attendees are attached to the right event when several are listed.
#[tokio::test]
async fn attaches_attendees_per_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let attendee = factory::create_user(db).await?;
    let first = factory::event::EventFactory::new(db, organizer.id)
        .date(Utc::now() + Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, organizer.id)
        .date(Utc::now() + Duration::days(2))
        .build()
        .await?;
    factory::add_attendee(db, first.id, attendee.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_all().await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].attendees.len(), 1);
    assert_eq!(events[0].attendees[0].id, attendee.id);
    assert!(events[1].attendees.is_empty());

    Ok(())
}
