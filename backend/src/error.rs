use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel::ConnectionError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read sample listings: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected at least {expected} columns, found {found}")]
    MissingColumn {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: column `{column}` is required")]
    MissingRequired { row: usize, column: &'static str },

    #[error("row {row}: column `{column}` has invalid value {value:?}")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: cannot parse available date {value:?}: {source}")]
    InvalidDate {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to insert listing: {0}")]
    Database(#[from] diesel::result::Error),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database connection failed: {0}")]
    Connection(#[from] ConnectionError),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("ingestion aborted: {0}")]
    Ingest(#[from] IngestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));
        (status, body).into_response()
    }
}
