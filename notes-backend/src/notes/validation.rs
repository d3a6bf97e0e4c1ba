//! Boundary validation for note payloads.
//!
//! Runs before anything reaches the store. Every field is checked so the client
//! sees all violations at once.

use std::collections::BTreeMap;

use crate::models::{NewNote, NotePayload};

pub const TITLE_MAX_CHARS: usize = 100;
pub const BODY_MAX_CHARS: usize = 1000;

/// Field name -> violation message
pub type FieldErrors = BTreeMap<String, String>;

/// Check a payload and turn it into storable content.
pub fn validate(payload: &NotePayload) -> Result<NewNote, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = check_field(payload.title.as_deref(), "title", "Title", TITLE_MAX_CHARS, &mut errors);
    let body = check_field(payload.body.as_deref(), "body", "Body", BODY_MAX_CHARS, &mut errors);

    match (title, body) {
        (Some(title), Some(body)) => Ok(NewNote::new(title, body)),
        _ => Err(errors),
    }
}

/// Non-blank and at most `max_chars` Unicode scalar values.
fn check_field<'a>(
    value: Option<&'a str>,
    field: &str,
    label: &str,
    max_chars: usize,
    errors: &mut FieldErrors,
) -> Option<&'a str> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            errors.insert(field.to_string(), format!("{} is required", label));
            return None;
        }
    };

    if value.chars().count() > max_chars {
        errors.insert(
            field.to_string(),
            format!("{} must not exceed {} characters", label, max_chars),
        );
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload() {
        let note = validate(&NotePayload::new("My First Note", "Some content")).unwrap();
        assert_eq!(note.title, "My First Note");
        assert_eq!(note.body, "Some content");
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let note = validate(&NotePayload::new("  padded  ", "\tbody\n")).unwrap();
        assert_eq!(note.title, "  padded  ");
        assert_eq!(note.body, "\tbody\n");
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate(&NotePayload::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["title"], "Title is required");
        assert_eq!(errors["body"], "Body is required");
    }

    #[test]
    fn test_blank_fields() {
        let errors = validate(&NotePayload::new("   ", "")).unwrap_err();
        assert_eq!(errors["title"], "Title is required");
        assert_eq!(errors["body"], "Body is required");
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let title = "t".repeat(TITLE_MAX_CHARS);
        let body = "b".repeat(BODY_MAX_CHARS);
        assert!(validate(&NotePayload::new(title, body)).is_ok());
    }

    #[test]
    fn test_too_long() {
        let title = "t".repeat(TITLE_MAX_CHARS + 1);
        let body = "b".repeat(BODY_MAX_CHARS + 1);

        let errors = validate(&NotePayload::new(title, body)).unwrap_err();

        assert_eq!(errors["title"], "Title must not exceed 100 characters");
        assert_eq!(errors["body"], "Body must not exceed 1000 characters");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 100 two-byte characters is 200 bytes but still within the limit
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate(&NotePayload::new(title, "body")).is_ok());
    }

    #[test]
    fn test_only_offending_field_reported() {
        let errors = validate(&NotePayload::new("Fine", " ")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("body"));
    }
}
