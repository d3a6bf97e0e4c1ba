//! OpenAPI 3.0 description of the notes API, served at `/api-docs`.

use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

use super::health::VERSION;
use crate::notes::validation::{BODY_MAX_CHARS, TITLE_MAX_CHARS};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api-docs").route(web::get().to(api_docs)));
}

async fn api_docs() -> impl Responder {
    HttpResponse::Ok().json(openapi_document())
}

fn error_ref(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } }
        }
    })
}

fn note_ref(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Note" } }
        }
    })
}

fn id_param(description: &str) -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": description,
        "example": 1,
        "schema": { "type": "integer", "format": "int64" }
    })
}

pub fn openapi_document() -> Value {
    let note_body = json!({
        "required": true,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/NoteInput" } }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Notes API",
            "version": VERSION,
            "description": "API for managing notes"
        },
        "tags": [{ "name": "Notes", "description": "API for managing notes" }],
        "paths": {
            "/notes": {
                "get": {
                    "tags": ["Notes"],
                    "summary": "Get all notes",
                    "operationId": "getAllNotes",
                    "responses": {
                        "200": {
                            "description": "Successfully retrieved all notes",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Note" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "tags": ["Notes"],
                    "summary": "Create a new note",
                    "operationId": "createNote",
                    "requestBody": note_body.clone(),
                    "responses": {
                        "201": note_ref("Note created successfully"),
                        "400": error_ref("Invalid input data")
                    }
                }
            },
            "/notes/{id}": {
                "get": {
                    "tags": ["Notes"],
                    "summary": "Get note by ID",
                    "operationId": "getNoteById",
                    "parameters": [id_param("ID of the note to retrieve")],
                    "responses": {
                        "200": note_ref("Note found"),
                        "404": error_ref("Note not found")
                    }
                },
                "put": {
                    "tags": ["Notes"],
                    "summary": "Update a note",
                    "operationId": "updateNote",
                    "parameters": [id_param("ID of the note to update")],
                    "requestBody": note_body,
                    "responses": {
                        "200": note_ref("Note updated successfully"),
                        "400": error_ref("Invalid input data"),
                        "404": error_ref("Note not found")
                    }
                },
                "delete": {
                    "tags": ["Notes"],
                    "summary": "Delete a note",
                    "operationId": "deleteNote",
                    "parameters": [id_param("ID of the note to delete")],
                    "responses": {
                        "204": { "description": "Note deleted successfully" },
                        "404": error_ref("Note not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "NoteInput": {
                    "type": "object",
                    "required": ["title", "body"],
                    "properties": {
                        "title": { "type": "string", "maxLength": TITLE_MAX_CHARS, "example": "My First Note" },
                        "body": { "type": "string", "maxLength": BODY_MAX_CHARS, "example": "This is the content of my note" }
                    }
                },
                "Note": {
                    "type": "object",
                    "required": ["id", "title", "body", "createdAt", "updatedAt"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64", "example": 1 },
                        "title": { "type": "string", "maxLength": TITLE_MAX_CHARS },
                        "body": { "type": "string", "maxLength": BODY_MAX_CHARS },
                        "createdAt": { "type": "string", "format": "date-time" },
                        "updatedAt": { "type": "string", "format": "date-time" }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "required": ["timestamp", "status", "error", "message", "path"],
                    "properties": {
                        "timestamp": { "type": "string", "format": "date-time" },
                        "status": { "type": "integer" },
                        "error": { "type": "string" },
                        "message": { "type": "string" },
                        "path": { "type": "string" },
                        "fieldErrors": {
                            "type": "object",
                            "additionalProperties": { "type": "string" }
                        }
                    }
                }
            }
        }
    })
}
