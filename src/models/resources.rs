//! Resource records held by the store.

use serde::Serialize;

/// A task-like record with a title and free-text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Card {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A named grouping of card ids.
///
/// `card_ids` is not checked against the cards actually in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: u64,
    pub header: String,
    pub card_ids: Vec<u64>,
}

impl List {
    pub fn new(id: u64, header: impl Into<String>, card_ids: Vec<u64>) -> Self {
        Self {
            id,
            header: header.into(),
            card_ids,
        }
    }
}
