use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        announcement::{Audience, Priority},
        event::EventCategory,
        user::Role,
    },
    server::{
        error::{auth::AuthError, rsvp::RsvpError, AppError},
        model::{announcement::AnnouncementParams, event::EventParams, user::User},
        service::token::TokenService,
    },
};
use test_utils::{builder::TestBuilder, factory};


async fn user_with_role(db: &DatabaseConnection, role: &str) -> Result<User, AppError> {
    let entity = factory::user::UserFactory::new(db).role(role).build().await?;

    Ok(User::from_entity(entity)?)
}

fn announcement_params(title: &str) -> AnnouncementParams {
    AnnouncementParams {
        title: title.to_string(),
        content: "Campus closed on Friday".to_string(),
        priority: Priority::High,
        target_audience: vec![Audience::All],
        attachments: Vec::new(),
        expires_at: None,
    }
}

fn event_params(title: &str, max_attendees: Option<i32>) -> EventParams {
    EventParams {
        title: title.to_string(),
        description: "Evening meetup".to_string(),
        date: Utc::now() + Duration::days(5),
        location: "Student Union".to_string(),
        category: EventCategory::Social,
        max_attendees,
        image: None,
        tags: Vec::new(),
    }
}
