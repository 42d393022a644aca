//! Card selection state for hand entry.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::validator::HAND_SIZE;

/// An ordered set of unique selected cards with a fixed capacity.
///
/// ```
/// use pokerhands::{Card, CardSelection};
///
/// let mut selection = CardSelection::new();
/// let ace: Card = "A♠".parse().unwrap();
/// assert!(selection.toggle(ace));
/// assert!(!selection.toggle(ace));
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSelection {
    cards: Vec<Card>,
    capacity: usize,
}

impl CardSelection {
    /// Creates an empty selection holding up to five cards.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(HAND_SIZE)
    }

    /// Creates an empty selection holding up to `capacity` cards.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::new(),
            capacity,
        }
    }

    /// Selects a card, or deselects it if already selected.
    ///
    /// A card is not added once the selection is full. Returns whether the
    /// card is selected afterwards.
    pub fn toggle(&mut self, card: Card) -> bool {
        if let Some(position) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(position);
            return false;
        }

        if self.is_full() {
            return false;
        }

        self.cards.push(card);
        true
    }

    /// Returns the selected cards in selection order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is selected.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the maximum number of cards.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of selected cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no card is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the selection is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// Deselects all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Default for CardSelection {
    fn default() -> Self {
        Self::new()
    }
}
