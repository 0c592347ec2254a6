use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Web layer errors.
///
/// The score store itself cannot fail, so everything here is a request
/// problem detected before the store is touched.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
