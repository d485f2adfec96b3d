use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failed to load catalog: {0}")]
    CatalogLoad(String),

    #[error("Catalog contains no movies")]
    EmptyCatalog,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to vectorize overviews: {0}")]
    Vectorize(String),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::CatalogLoad(err.to_string())
    }
}

impl From<aprender::error::AprenderError> for AppError {
    fn from(err: aprender::error::AprenderError) -> Self {
        AppError::Vectorize(err.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Vectorize(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::CatalogLoad(_) | AppError::EmptyCatalog | AppError::Vectorize(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
