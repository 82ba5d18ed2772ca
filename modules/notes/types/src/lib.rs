//! Shared types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /write`.
///
/// Both fields are optional on the wire so that a missing field reaches the
/// store as an empty string instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteForm {
    /// Unique name of the note
    #[serde(default)]
    pub note_name: Option<String>,
    /// Note content
    #[serde(default)]
    pub note: Option<String>,
}

impl CreateNoteForm {
    /// Name and text, with absent fields as empty strings
    pub fn into_parts(self) -> (String, String) {
        (
            self.note_name.unwrap_or_default(),
            self.note.unwrap_or_default(),
        )
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A named piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

impl Note {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub total_notes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_form_missing_fields() {
        let form: CreateNoteForm = serde_json::from_str(r#"{"note_name":"todo"}"#).unwrap();
        assert_eq!(form.note_name.as_deref(), Some("todo"));
        assert!(form.note.is_none());

        let (name, text) = form.into_parts();
        assert_eq!(name, "todo");
        assert_eq!(text, "");
    }

    #[test]
    fn test_note_json_shape() {
        let value = serde_json::to_value(Note::new("a", "x")).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "a", "text": "x" }));
    }
}
