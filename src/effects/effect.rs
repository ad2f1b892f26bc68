//! Effect definitions.
//!
//! An `Effect` is one action-card play with its choices already resolved by
//! the caller. The resolver turns it into a handler call.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::PlayerId;

use super::tribute::Revealed;

/// A card play and the acting player's choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// +1 Buy; discard an Estate for +4 coins or gain an Estate.
    Baron { discard_estate: bool },

    /// +1 Action; +2 coins, or reset hands.
    Minion {
        gain_coins: bool,
        discard_and_draw: bool,
    },

    /// Reveal two cards from a player's deck.
    /// `None` reveals from the seat to the acting player's left.
    Tribute { left_player: Option<PlayerId> },

    /// Return 1-2 copies of a card; every other player gains one.
    Ambassador { kind: CardKind, copies: usize },

    /// Trash a Copper or Silver and gain the next treasure up.
    Mine { upgrade_to: CardKind },
}

impl Effect {
    /// The card whose effect this is.
    #[must_use]
    pub fn card(&self) -> CardKind {
        match self {
            Effect::Baron { .. } => CardKind::Baron,
            Effect::Minion { .. } => CardKind::Minion,
            Effect::Tribute { .. } => CardKind::Tribute,
            Effect::Ambassador { .. } => CardKind::Ambassador,
            Effect::Mine { .. } => CardKind::Mine,
        }
    }

    /// Create a Baron play.
    pub fn baron(discard_estate: bool) -> Self {
        Self::Baron { discard_estate }
    }

    /// Create a Minion play taking +2 coins.
    pub fn minion_coins() -> Self {
        Self::Minion {
            gain_coins: true,
            discard_and_draw: false,
        }
    }

    /// Create a Minion play resetting hands.
    pub fn minion_redraw() -> Self {
        Self::Minion {
            gain_coins: false,
            discard_and_draw: true,
        }
    }

    /// Create a Tribute play against the acting player's left neighbour.
    pub fn tribute() -> Self {
        Self::Tribute { left_player: None }
    }

    /// Create an Ambassador play.
    pub fn ambassador(kind: CardKind, copies: usize) -> Self {
        Self::Ambassador { kind, copies }
    }

    /// Create a Mine play.
    pub fn mine(upgrade_to: CardKind) -> Self {
        Self::Mine { upgrade_to }
    }
}

/// What a resolved effect reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    /// The effect resolved; its changes are in the state.
    Done,
    /// Tribute's revealed cards.
    Revealed(Revealed),
    /// Mine's trashed treasure, `None` if nothing was mined.
    Trashed(Option<CardKind>),
}
