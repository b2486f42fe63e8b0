//! Flip mode: step through the cards of a set, revealing one definition at a time.

use thiserror::Error;

use crate::model::Card;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("flip review needs at least one card")]
pub struct EmptyDeck;

/// Cyclic position over a card list plus whether the current card is flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipReview {
    len: usize,
    index: usize,
    revealed: bool,
}

impl FlipReview {
    /// # Errors
    ///
    /// Returns `EmptyDeck` when `cards` is empty.
    pub fn new(cards: &[Card]) -> Result<Self, EmptyDeck> {
        Self::with_len(cards.len())
    }

    /// # Errors
    ///
    /// Returns `EmptyDeck` when `len` is zero.
    pub fn with_len(len: usize) -> Result<Self, EmptyDeck> {
        if len == 0 {
            return Err(EmptyDeck);
        }
        Ok(Self {
            len,
            index: 0,
            revealed: false,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn current<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        cards.get(self.index)
    }

    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.revealed = false;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.revealed = false;
    }

    /// Position label, e.g. `CARD 2 / 4`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("CARD {} / {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_refused() {
        assert_eq!(FlipReview::new(&[]).unwrap_err(), EmptyDeck);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut review = FlipReview::with_len(3).unwrap();
        review.prev();
        assert_eq!(review.index(), 2);
        review.next();
        assert_eq!(review.index(), 0);
        review.next();
        review.next();
        review.next();
        assert_eq!(review.index(), 0);
    }

    #[test]
    fn navigation_hides_the_answer() {
        let mut review = FlipReview::with_len(2).unwrap();
        review.flip();
        assert!(review.is_revealed());
        review.next();
        assert!(!review.is_revealed());
        review.flip();
        review.prev();
        assert!(!review.is_revealed());
    }

    #[test]
    fn flip_toggles() {
        let mut review = FlipReview::with_len(1).unwrap();
        review.flip();
        review.flip();
        assert!(!review.is_revealed());
        assert_eq!(review.label(), "CARD 1 / 1");
    }
}
