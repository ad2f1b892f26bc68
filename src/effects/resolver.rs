//! Effect resolution - executing card plays on game state.

use crate::core::{EngineError, GameState, PlayerId};

use super::{ambassador, baron, mine, minion, tribute, Effect, EffectOutcome};

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one card play by `player`.
    pub fn resolve(
        state: &mut GameState,
        player: PlayerId,
        effect: &Effect,
    ) -> Result<EffectOutcome, EngineError> {
        let _span = tracing::debug_span!("resolve", card = %effect.card(), %player).entered();

        match *effect {
            Effect::Baron { discard_estate } => {
                baron(state, player, discard_estate)?;
                Ok(EffectOutcome::Done)
            }

            Effect::Minion {
                gain_coins,
                discard_and_draw,
            } => {
                minion(state, player, gain_coins, discard_and_draw)?;
                Ok(EffectOutcome::Done)
            }

            Effect::Tribute { left_player } => {
                state.check_player(player)?;
                let left_player = left_player.unwrap_or_else(|| state.left_of(player));
                tribute(state, player, left_player).map(EffectOutcome::Revealed)
            }

            Effect::Ambassador { kind, copies } => {
                ambassador(state, player, kind, copies)?;
                Ok(EffectOutcome::Done)
            }

            Effect::Mine { upgrade_to } => {
                mine(state, player, upgrade_to).map(EffectOutcome::Trashed)
            }
        }
    }

    /// Resolve plays in order, stopping at the first failure.
    ///
    /// Returns the outcomes of the plays that resolved.
    pub fn resolve_sequence(
        state: &mut GameState,
        player: PlayerId,
        effects: &[Effect],
    ) -> Result<Vec<EffectOutcome>, EngineError> {
        effects
            .iter()
            .map(|effect| Self::resolve(state, player, effect))
            .collect()
    }
}
