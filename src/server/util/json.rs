use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections become `AppError::BadRequest`.
///
/// Axum's own `Json` answers malformed or incomplete bodies with 415/422 and a plain-text
/// body; wrapping it keeps every client error a 400 with the usual `ErrorDto` shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
