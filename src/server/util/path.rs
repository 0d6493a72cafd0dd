use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// Path parameter extractor whose rejections become `AppError::BadRequest`.
///
/// A non-numeric or out-of-range id otherwise gets axum's plain-text 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
