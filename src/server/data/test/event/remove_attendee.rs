use super::*;

/// Tests removing a registered attendee.
///
/// Expected: Ok(1) and the user is no longer an attendee
#[tokio::test]
async fn removes_registered_attendee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = factory::helpers::create_event_with_organizer(db).await?;
    let user = factory::create_user(db).await?;
    factory::add_attendee(db, event.id, user.id).await?;

    let repo = EventRepository::new(db);

    assert_eq!(repo.remove_attendee(event.id, user.id).await?, 1);
    assert!(!repo.get_by_id(event.id).await?.unwrap().is_attendee(user.id));

    Ok(())
}

/// Tests removing a user who never registered.
///
/// Verifies that other attendees are left alone.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_noop_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = factory::helpers::create_event_with_organizer(db).await?;
    let member = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    factory::add_attendee(db, event.id, member.id).await?;

    let repo = EventRepository::new(db);

    assert_eq!(repo.remove_attendee(event.id, outsider.id).await?, 0);
    assert_eq!(repo.count_attendees(event.id).await?, 1);

    Ok(())
}
