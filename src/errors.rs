use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Service-wide error taxonomy: submission validation, table persistence,
/// optional assets and report generation, plus conversions for the libraries
/// sitting under them.
#[derive(Debug, Error)]
pub enum ScoutingError {
    #[error("ERR-VALIDATE-001: {0}")]
    Validation(String),
    #[error("ERR-STORE-001: {0}")]
    Store(String),
    #[error("ERR-ASSET-001: {0}")]
    Asset(String),
    #[error("ERR-REPORT-001: {0}")]
    Report(String),
    #[error("ERR-NOTFOUND-001: {0}")]
    NotFound(String),
    #[error("ERR-IO-001: {0}")]
    Io(#[from] std::io::Error),
    #[error("ERR-CSV-001: {0}")]
    Csv(#[from] csv::Error),
    #[error("ERR-TEMPLATE-001: {0}")]
    Template(#[from] askama::Error),
    #[error("ERR-JSON-001: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ERR-IMAGE-001: {0}")]
    Image(#[from] image::ImageError),
    #[error("ERR-PDF-001: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl ScoutingError {
    fn status(&self) -> StatusCode {
        match self {
            ScoutingError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ScoutingError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScoutingError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", &self);
        } else {
            tracing::warn!("{}", &self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let err = ScoutingError::Validation("campo faltante".into());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("campo faltante"));
    }

    #[test]
    fn missing_resources_map_to_not_found() {
        let err = ScoutingError::NotFound("player".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
