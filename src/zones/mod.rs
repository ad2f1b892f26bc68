//! Card storage: per-player piles, the shared supply and the trash.
//!
//! - `Pile`: bounded ordered sequence (hand, deck, discard, trash)
//! - `Supply`: per-kind remaining counts
//! - `PlayerPiles`: the three piles a player owns

mod pile;
mod supply;

pub use pile::Pile;
pub use supply::Supply;

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::PileKind;

/// A player's hand, draw pile and discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPiles {
    pub hand: Pile,
    pub deck: Pile,
    pub discard: Pile,
}

impl PlayerPiles {
    /// Create three empty piles of the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hand: Pile::with_capacity(capacity),
            deck: Pile::with_capacity(capacity),
            discard: Pile::with_capacity(capacity),
        }
    }

    /// Get a pile by kind.
    #[must_use]
    pub fn pile(&self, kind: PileKind) -> &Pile {
        match kind {
            PileKind::Hand => &self.hand,
            PileKind::Deck => &self.deck,
            PileKind::Discard => &self.discard,
        }
    }

    /// Get a mutable pile by kind.
    pub fn pile_mut(&mut self, kind: PileKind) -> &mut Pile {
        match kind {
            PileKind::Hand => &mut self.hand,
            PileKind::Deck => &mut self.deck,
            PileKind::Discard => &mut self.discard,
        }
    }

    /// Copies of `kind` across all three piles.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.hand.count_of(kind) + self.deck.count_of(kind) + self.discard.count_of(kind)
    }

    /// Every card the player owns: hand, then deck, then discard.
    pub fn all_cards(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.hand.iter().chain(self.deck.iter()).chain(self.discard.iter())
    }

    /// Total cards the player owns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.hand.len() + self.deck.len() + self.discard.len()
    }
}
