//! Notes REST API: create, list, read, update and delete.
//!
//! Payloads are validated here before the store sees them; store misses become
//! 404 responses.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::controllers::method_not_allowed;
use crate::errors::ApiError;
use crate::models::{NewNote, NotePayload};
use crate::notes::validation;
use crate::AppState;

fn validated(req: &HttpRequest, payload: &NotePayload) -> Result<NewNote, ApiError> {
    validation::validate(payload).map_err(|field_errors| {
        log::warn!(
            "[NOTES] Rejected payload on {} {}: {:?}",
            req.method(),
            req.path(),
            field_errors
        );
        ApiError::Validation {
            path: req.path().to_string(),
            field_errors,
        }
    })
}

fn not_found(req: &HttpRequest, id: i64) -> ApiError {
    ApiError::NotFound {
        id,
        path: req.path().to_string(),
    }
}

/// Create a note. Any client-supplied id or timestamps are ignored.
async fn create_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<NotePayload>,
) -> Result<HttpResponse, ApiError> {
    let candidate = validated(&req, &body)?;
    let note = data.store.insert(candidate);
    Ok(HttpResponse::Created().json(note))
}

async fn list_notes(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(data.store.get_all())
}

async fn get_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let note = data.store.get(id).ok_or_else(|| not_found(&req, id))?;
    Ok(HttpResponse::Ok().json(note))
}

/// Replace title and body of a note. Validation runs before the lookup.
async fn update_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<NotePayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let candidate = validated(&req, &body)?;
    let note = data
        .store
        .update(id, candidate)
        .ok_or_else(|| not_found(&req, id))?;
    Ok(HttpResponse::Ok().json(note))
}

async fn delete_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !data.store.delete(id) {
        return Err(not_found(&req, id));
    }
    Ok(HttpResponse::NoContent().finish())
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        ApiError::BadRequest {
            path: req.path().to_string(),
            message: format!("Malformed request body: {}", err),
        }
        .into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let raw = req.match_info().get("id").unwrap_or_default();
        ApiError::BadRequest {
            path: req.path().to_string(),
            message: format!("Invalid note id '{}': {}", raw, err),
        }
        .into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .app_data(json_config())
            .app_data(path_config())
            .service(
                web::resource("")
                    .route(web::post().to(create_note))
                    .route(web::get().to(list_notes))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_note))
                    .route(web::put().to(update_note))
                    .route(web::delete().to(delete_note))
                    .default_service(web::to(method_not_allowed)),
            ),
    );
}
