use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    response::Response,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{router::router, service::token::TokenService, state::AppState};
use test_utils::{builder::TestBuilder, factory};


fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        TokenService::new("controller-test-secret", Duration::hours(24)),
    )
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(state: AppState, request: Request<Body>) -> Response {
    router(state).oneshot(request).await.unwrap()
}

/// Asserts a JSON `ErrorDto` response and returns its message.
async fn error_message(response: Response) -> String {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/json");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    body["error"].as_str().unwrap().to_string()
}
