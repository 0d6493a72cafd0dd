use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected RSVP transitions.
#[derive(Error, Debug)]
pub enum RsvpError {
    /// The user is already in the event's attendee list.
    #[error("User {user_id} is already registered for event {event_id}")]
    AlreadyRegistered { event_id: i32, user_id: i32 },

    /// The event has reached its maximum number of attendees.
    #[error("Event {event_id} is full")]
    EventFull { event_id: i32 },
}

/// Converts RSVP errors into 400 Bad Request responses.
impl IntoResponse for RsvpError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::AlreadyRegistered { .. } => "Already registered for this event",
            Self::EventFull { .. } => "Event is full",
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
