//! Resource Store Module
//!
//! Vec-backed storage for cards and lists. Lookups are linear scans and
//! creation is an append, so iteration order is insertion order.

use crate::models::{Card, List};

// == Resource Store ==
/// Cards and lists held for the lifetime of the process.
#[derive(Debug)]
pub struct ResourceStore {
    cards: Vec<Card>,
    lists: Vec<List>,
    /// Id handed to the next created card
    next_card_id: u64,
}

impl ResourceStore {
    // == Constructors ==
    /// Creates a store holding the given records.
    ///
    /// New card ids start one past the highest id in `cards`.
    pub fn new(cards: Vec<Card>, lists: Vec<List>) -> Self {
        let next_card_id = cards.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            cards,
            lists,
            next_card_id,
        }
    }

    /// Creates a store with the startup records: one card and one list
    /// referencing it.
    pub fn seeded() -> Self {
        Self::new(
            vec![Card::new(1, "Task One", "This is card one")],
            vec![List::new(1, "List One", vec![1])],
        )
    }

    // == Cards ==
    /// All cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Finds a card by id.
    pub fn card(&self, id: u64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Appends a new card with a freshly generated id and returns it.
    ///
    /// Field validation happens at the HTTP layer.
    pub fn insert_card(&mut self, title: String, content: String) -> Card {
        let card = Card {
            id: self.next_card_id,
            title,
            content,
        };
        self.next_card_id += 1;
        self.cards.push(card.clone());
        card
    }

    // == Lists ==
    /// All lists in insertion order.
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Finds a list by id.
    pub fn list(&self, id: u64) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_seeded() {
        let store = ResourceStore::seeded();
        assert_eq!(store.cards().len(), 1);
        assert_eq!(store.lists().len(), 1);
        assert_eq!(store.list(1), Some(&List::new(1, "List One", vec![1])));
        assert_eq!(store.card(1).map(|c| c.title.as_str()), Some("Task One"));
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = ResourceStore::seeded();
        assert!(store.card(999).is_none());
        assert!(store.list(999).is_none());
    }

    #[test]
    fn test_store_insert_card_appends() {
        let mut store = ResourceStore::seeded();

        let card = store.insert_card("Task Two".to_string(), "body".to_string());

        assert_eq!(card.id, 2);
        assert_eq!(store.cards().len(), 2);
        assert_eq!(store.cards().last(), Some(&card));
        assert_eq!(store.card(2), Some(&card));
    }

    #[test]
    fn test_store_ids_start_after_highest_seed() {
        let mut store = ResourceStore::new(
            vec![Card::new(3, "a", "a"), Card::new(10, "b", "b")],
            Vec::new(),
        );

        assert_eq!(store.insert_card("c".into(), "c".into()).id, 11);
    }

    #[test]
    fn test_store_empty() {
        let mut store = ResourceStore::default();
        assert!(store.cards().is_empty());
        assert!(store.lists().is_empty());
        assert_eq!(store.insert_card("a".into(), "b".into()).id, 1);
    }
}
