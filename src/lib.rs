//! # dominion-effects
//!
//! Card-effect resolution for a Dominion-style deck-building game.
//!
//! ## Design Principles
//!
//! 1. **Counts are lengths**: every pile is a bounded `Pile`, so a pile's
//!    size can never disagree with its contents.
//!
//! 2. **Validate, then mutate**: handlers check every precondition before
//!    the first change, so a rejected play leaves the state untouched.
//!
//! 3. **Conservation**: cards only move between piles, the supply and the
//!    trash. `GameState::census` is the same before and after any effect.
//!
//! ## Modules
//!
//! - `core`: Players, game state and pile primitives, config, RNG, errors
//! - `cards`: Card kinds and categories
//! - `zones`: Piles and the supply
//! - `effects`: Baron, Minion, Tribute, Ambassador and Mine

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, GameRng, GameRngState, GameState, GameStateBuilder, PileKind,
    PlayerId, PlayerMap, MAX_DECK, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::cards::{CardCategory, CardKind};

pub use crate::zones::{Pile, PlayerPiles, Supply};

pub use crate::effects::{
    ambassador, baron, mine, minion, tribute, Effect, EffectOutcome, EffectResolver, Revealed,
};
