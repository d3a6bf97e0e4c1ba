//! Client-facing API errors.
//!
//! Every variant renders as an [`ErrorResponse`] body with the matching status.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::Utc;
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::notes::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation { path: String, field_errors: FieldErrors },

    #[error("Note not found with id: {id}")]
    NotFound { id: i64, path: String },

    /// Body or path parameter could not be decoded
    #[error("{message}")]
    BadRequest { path: String, message: String },

    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl ApiError {
    pub fn path(&self) -> &str {
        match self {
            ApiError::Validation { path, .. }
            | ApiError::NotFound { path, .. }
            | ApiError::BadRequest { path, .. }
            | ApiError::RouteNotFound { path, .. }
            | ApiError::MethodNotAllowed { path, .. } => path,
        }
    }

    pub fn to_body(&self) -> ErrorResponse {
        let status = self.status_code();
        let field_errors = match self {
            ApiError::Validation { field_errors, .. } => Some(field_errors.clone()),
            _ => None,
        };

        ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: self.to_string(),
            path: self.path().to_string(),
            field_errors,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::debug!("[API] {} rejected: {}", self.path(), self);
        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id_and_path() {
        let err = ApiError::NotFound {
            id: 7,
            path: "/notes/7".to_string(),
        };
        let body = err.to_body();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "Note not found with id: 7");
        assert_eq!(body.path, "/notes/7");
        assert!(body.field_errors.is_none());
    }

    #[test]
    fn test_validation_carries_field_errors() {
        let mut field_errors = FieldErrors::new();
        field_errors.insert("title".to_string(), "Title is required".to_string());

        let err = ApiError::Validation {
            path: "/notes".to_string(),
            field_errors,
        };
        let body = err.to_body();

        assert_eq!(body.status, 400);
        assert_eq!(body.error, "Bad Request");
        assert_eq!(body.message, "Validation failed");
        assert_eq!(body.field_errors.unwrap()["title"], "Title is required");
    }

    #[test]
    fn test_route_not_found_message() {
        let err = ApiError::RouteNotFound {
            method: "PATCH".to_string(),
            path: "/notes/1".to_string(),
        };
        assert_eq!(err.to_string(), "No route for PATCH /notes/1");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
