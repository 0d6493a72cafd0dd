use super::*;

/// Tests that the guard applies permissions after authenticating.
///
/// Expected: Ok for the announcement's author
#[tokio::test]
async fn grants_author_of_announcement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, announcement) = factory::helpers::create_announcement_with_author(db).await?;

    let tokens = token_service();
    let headers = bearer(&tokens.issue(author.id)?);

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard
        .require(&[Permission::AnnouncementAuthor(announcement.author_id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an authenticated user who does not organize the event.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_organizer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, event) = factory::helpers::create_event_with_organizer(db).await?;
    let other = factory::create_user(db).await?;

    let tokens = token_service();
    let headers = bearer(&tokens.issue(other.id)?);

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard
        .require(&[Permission::EventOrganizer(event.organizer_id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == other.id
    ));

    Ok(())
}
