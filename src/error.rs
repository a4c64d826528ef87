use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::{CsvError, ReaderError};

/// Errors returned by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Report reader failed: {0}")]
    Reader(#[from] ReaderError),

    #[error("CSV export failed: {0}")]
    Csv(#[from] CsvError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "invalid_request",
            ApiError::Reader(_) => "report_unavailable",
            ApiError::Csv(_) => "export_failed",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Reader(_) | ApiError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let message = match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Reader(e) => {
                tracing::error!(error = %e, "Report reader error");
                "Internal server error".to_string()
            }
            ApiError::Csv(e) => {
                tracing::error!(error = %e, "CSV export error");
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message,
            status_code: status.as_u16(),
        })
    }
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::Validation(format!("Invalid query: {}", err)).into()
}
