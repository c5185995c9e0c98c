pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::error::AppError;
use crate::state::IncidentStore;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IncidentStore>,
}

impl AppState {
    pub fn new(store: Arc<IncidentStore>) -> Self {
        Self { store }
    }
}

/// Strict JSON extractor.
///
/// Delegates to `axum::Json` but routes rejections (malformed bodies,
/// unknown fields) through [`AppError`] so they come back as 400 with the
/// service's error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
