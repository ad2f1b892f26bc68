//! Engine configuration.
//!
//! `EngineConfig` carries the limits and placement policies the pile
//! primitives and effect handlers consult. It is fixed for the life of a
//! `GameState`.

use serde::{Deserialize, Serialize};

/// Per-pile capacity of the classic engine.
pub const MAX_DECK: usize = 500;

/// One of the three piles every player owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Cards available to play this turn.
    Hand,
    /// Face-down draw pile. Cards placed here go on top.
    Deck,
    /// Face-up discard pile.
    Discard,
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PileKind::Hand => "hand",
            PileKind::Deck => "deck",
            PileKind::Discard => "discard pile",
        };
        f.write_str(name)
    }
}

/// Limits and gain placement policy.
///
/// ## Defaults
///
/// - `max_pile`: `MAX_DECK`
/// - `baron_gain_to`: discard pile
/// - `mine_gain_to`: hand
///
/// ```
/// use dominion_effects::core::{EngineConfig, PileKind};
///
/// let config = EngineConfig::default().with_baron_gain_to(PileKind::Deck);
/// assert_eq!(config.baron_gain_to, PileKind::Deck);
/// assert_eq!(config.mine_gain_to, PileKind::Hand);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum cards in any single hand, deck or discard pile.
    pub max_pile: usize,

    /// Where Baron puts the Estate it gains when no Estate is discarded.
    pub baron_gain_to: PileKind,

    /// Where Mine puts the upgraded treasure.
    pub mine_gain_to: PileKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_pile: MAX_DECK,
            baron_gain_to: PileKind::Discard,
            mine_gain_to: PileKind::Hand,
        }
    }
}

impl EngineConfig {
    /// Set the per-pile capacity.
    #[must_use]
    pub fn with_max_pile(mut self, max_pile: usize) -> Self {
        self.max_pile = max_pile;
        self
    }

    /// Set Baron's gain destination.
    #[must_use]
    pub fn with_baron_gain_to(mut self, pile: PileKind) -> Self {
        self.baron_gain_to = pile;
        self
    }

    /// Set Mine's gain destination.
    #[must_use]
    pub fn with_mine_gain_to(mut self, pile: PileKind) -> Self {
        self.mine_gain_to = pile;
        self
    }
}
