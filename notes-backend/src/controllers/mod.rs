use actix_web::{HttpRequest, HttpResponse};

use crate::errors::ApiError;

pub mod docs;
pub mod health;
pub mod notes;

/// Fallback for any request no route matched
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}
