//! Bounded, ordered card piles.
//!
//! A `Pile` is the storage for a hand, a draw pile, a discard pile or the
//! trash. Its count is its length, so there is no stored counter to keep in
//! step with the contents. For draw piles the top card is the last element.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;

/// An ordered sequence of cards with a fixed capacity.
///
/// ```
/// use dominion_effects::cards::CardKind;
/// use dominion_effects::zones::Pile;
///
/// let mut deck = Pile::with_capacity(2);
/// assert!(deck.try_push(CardKind::Copper).is_ok());
/// assert!(deck.try_push(CardKind::Estate).is_ok());
/// assert_eq!(deck.try_push(CardKind::Gold), Err(CardKind::Gold));
///
/// assert_eq!(deck.top(), Some(CardKind::Estate));
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PileRepr")]
pub struct Pile {
    cards: Vec<CardKind>,
    capacity: usize,
}

/// Wire form of a `Pile`, checked against its capacity on decode.
#[derive(Deserialize)]
struct PileRepr {
    cards: Vec<CardKind>,
    capacity: usize,
}

impl TryFrom<PileRepr> for Pile {
    type Error = String;

    fn try_from(repr: PileRepr) -> Result<Self, Self::Error> {
        let (len, capacity) = (repr.cards.len(), repr.capacity);
        Self::from_cards(repr.cards, capacity)
            .map_err(|_| format!("pile of {len} cards exceeds capacity {capacity}"))
    }
}

impl Pile {
    /// Create an empty pile holding at most `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::new(),
            capacity,
        }
    }

    /// Create a pile with no practical limit (the shared trash).
    #[must_use]
    pub fn unbounded() -> Self {
        Self::with_capacity(usize::MAX)
    }

    /// Create a pile from cards, bottom first.
    ///
    /// Returns the cards back if they exceed `capacity`.
    pub fn from_cards(cards: Vec<CardKind>, capacity: usize) -> Result<Self, Vec<CardKind>> {
        if cards.len() > capacity {
            return Err(cards);
        }
        Ok(Self { cards, capacity })
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Maximum number of cards.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.cards.len())
    }

    /// Cards bottom first.
    #[must_use]
    pub fn as_slice(&self) -> &[CardKind] {
        &self.cards
    }

    /// Iterate bottom first.
    pub fn iter(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.cards.iter().copied()
    }

    /// Top card (last element), if any.
    #[must_use]
    pub fn top(&self) -> Option<CardKind> {
        self.cards.last().copied()
    }

    /// Index of the first card of `kind`.
    #[must_use]
    pub fn position(&self, kind: CardKind) -> Option<usize> {
        self.cards.iter().position(|&c| c == kind)
    }

    /// Check for at least one card of `kind`.
    #[must_use]
    pub fn contains(&self, kind: CardKind) -> bool {
        self.cards.contains(&kind)
    }

    /// Number of cards of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&c| c == kind).count()
    }

    /// Put a card on top, or hand it back if the pile is full.
    pub fn try_push(&mut self, kind: CardKind) -> Result<(), CardKind> {
        if self.cards.len() >= self.capacity {
            return Err(kind);
        }
        self.cards.push(kind);
        Ok(())
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Option<CardKind> {
        self.cards.pop()
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Option<CardKind> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Remove up to `n` cards of `kind`, returning how many were removed.
    pub fn remove_copies(&mut self, kind: CardKind, n: usize) -> usize {
        let mut removed = 0;
        self.cards.retain(|&c| {
            if removed < n && c == kind {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    /// Remove every card, leaving the pile empty.
    pub fn take_all(&mut self) -> Vec<CardKind> {
        std::mem::take(&mut self.cards)
    }

    /// Append cards in order. The caller guarantees they fit.
    pub(crate) fn extend_unchecked(&mut self, cards: impl IntoIterator<Item = CardKind>) {
        self.cards.extend(cards);
        debug_assert!(self.cards.len() <= self.capacity, "pile over capacity");
    }
}
