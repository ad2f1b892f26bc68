//! Card effect handlers.
//!
//! Each handler resolves one action card against `GameState`, built from
//! the pile primitives on the state:
//! - `baron`: +1 Buy; discard an Estate for +4 coins, or gain an Estate
//! - `minion`: +1 Action; +2 coins, or discard hands and draw 4
//! - `tribute`: reveal two cards from the left player and reward by category
//! - `ambassador`: return copies to the supply; others gain one
//! - `mine`: trash Copper for Silver or Silver for Gold
//!
//! `Effect` packages a play with its choices and `EffectResolver` dispatches
//! it to the matching handler.

mod ambassador;
mod baron;
mod effect;
mod mine;
mod minion;
mod resolver;
mod tribute;

pub use ambassador::ambassador;
pub use baron::baron;
pub use effect::{Effect, EffectOutcome};
pub use mine::mine;
pub use minion::minion;
pub use resolver::EffectResolver;
pub use tribute::{tribute, Revealed};
