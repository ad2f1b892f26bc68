//! Engine error type.

use super::config::PileKind;
use super::player::PlayerId;
use crate::cards::CardKind;

/// Errors surfaced by pile primitives and effect handlers.
///
/// Handlers validate before mutating, so a rejected play leaves the state
/// untouched. The `draw_cards` primitive on its own is the exception: a hand
/// that fills partway through keeps the cards already drawn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{player} is not seated in a {player_count}-player game")]
    InvalidPlayer { player: PlayerId, player_count: usize },

    #[error("games seat {min}-{max} players, got {requested}")]
    InvalidPlayerCount { requested: usize, min: usize, max: usize },

    #[error("ambassador returns 1 or 2 copies, got {requested}")]
    InvalidCopyCount { requested: usize },

    #[error("{player} holds {held} {kind}, cannot return {requested}")]
    InsufficientCopies {
        player: PlayerId,
        kind: CardKind,
        requested: usize,
        held: usize,
    },

    #[error("mine upgrades to {eligible}, not {requested}")]
    UpgradeMismatch { eligible: CardKind, requested: CardKind },

    #[error("no {0} left in the supply")]
    SupplyExhausted(CardKind),

    #[error("{player}'s {pile} is full ({capacity} cards)")]
    PileOverflow {
        player: PlayerId,
        pile: PileKind,
        capacity: usize,
    },

    #[error("hand index {index} out of range for {player} ({len} cards)")]
    HandIndexOutOfRange {
        player: PlayerId,
        index: usize,
        len: usize,
    },

    #[error("snapshot codec failed: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}
