use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The body was not a valid trade list (bad JSON, malformed date, unknown enum value).
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[from] JsonRejection),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidPayload(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Rejected analytics request.");
                (rejection.status(), rejection.body_text())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

/// Response for a handler that panicked; installed through `CatchPanicLayer`.
pub fn panic_response(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Analytics handler panicked.");
    let body = Json(json!({ "error": "An internal error occurred while generating the report" }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
