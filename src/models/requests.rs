//! Request DTOs for the API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating a card (POST /card)
///
/// Both fields are optional at the decoding level so that a missing field is
/// reported as invalid data rather than as a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCardRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateCardRequest {
    /// Validates the request data
    ///
    /// Returns the name of the first missing or empty field, None if valid.
    pub fn validate(&self) -> Option<&'static str> {
        if is_blank(&self.title) {
            return Some("title");
        }
        if is_blank(&self.content) {
            return Some("content");
        }
        None
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
