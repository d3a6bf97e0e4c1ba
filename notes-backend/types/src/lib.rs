//! Shared wire types for the notes service and its HTTP clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes` and `PUT /notes/{id}`.
///
/// Both fields are optional so a missing title or body is reported as a
/// field violation instead of a decoding failure. Any other key, including
/// the `id`, `createdAt` and `updatedAt` of an echoed [`Note`], is skipped
/// whatever its format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NotePayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// A stored note as returned by every successful notes endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Error body for every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    /// Reason phrase of `status`, e.g. "Not Found"
    pub error: String,
    pub message: String,
    /// Request path that produced the error
    pub path: String,
    /// Field name -> violation, only for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<BTreeMap<String, String>>,
}
