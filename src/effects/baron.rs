//! Baron: +1 Buy. Discard an Estate for +4 coins, or gain an Estate.

use crate::cards::CardKind;
use crate::core::{EngineError, GameState, PileKind, PlayerId};

/// Coins for discarding an Estate.
const ESTATE_DISCARD_COINS: u32 = 4;

/// Resolve Baron for `player`.
///
/// When `discard_estate` is set and the hand holds an Estate, the first one
/// is discarded for +4 coins. Otherwise an Estate is gained from the supply
/// to `EngineConfig::baron_gain_to`, if any remain.
pub fn baron(
    state: &mut GameState,
    player: PlayerId,
    discard_estate: bool,
) -> Result<(), EngineError> {
    state.check_player(player)?;

    let estate_at = if discard_estate {
        state.hand(player)?.position(CardKind::Estate)
    } else {
        None
    };
    let gain_to = state.config().baron_gain_to;

    match estate_at {
        Some(_) => state.ensure_room(player, PileKind::Discard, 1)?,
        None if state.supply().count(CardKind::Estate) > 0 => {
            state.ensure_room(player, gain_to, 1)?
        }
        None => {}
    }

    state.num_buys += 1;

    match estate_at {
        Some(index) => {
            state.discard_card(player, index)?;
            state.coins += ESTATE_DISCARD_COINS;
            tracing::debug!(%player, "baron: discarded estate");
        }
        None => {
            let gained = state.gain_card(player, CardKind::Estate, gain_to)?;
            tracing::debug!(%player, gained, wanted_discard = discard_estate, "baron: gain estate");
        }
    }

    Ok(())
}
