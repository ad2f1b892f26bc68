//! Core engine types: players, state, configuration, RNG, errors.
//!
//! The pile primitives live on `GameState`; effect handlers in
//! `crate::effects` are composed from them.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, PileKind, MAX_DECK};
pub use error::EngineError;
pub use state::{GameState, GameStateBuilder};
