//! Mine: trash a Copper for a Silver, or a Silver for a Gold.

use crate::cards::CardKind;
use crate::core::{EngineError, GameState, PileKind, PlayerId};

/// Treasures Mine looks for, in priority order.
const MINEABLE: [CardKind; 2] = [CardKind::Copper, CardKind::Silver];

/// Resolve Mine for `player`, who declares `upgrade_to` as the treasure to gain.
///
/// A Copper in hand is mined before a Silver. The declared upgrade must be
/// the one the mined treasure allows (Copper to Silver, Silver to Gold);
/// it is not substituted. The new treasure goes to
/// `EngineConfig::mine_gain_to`.
///
/// Returns the trashed treasure, or `None` when the hand holds neither.
pub fn mine(
    state: &mut GameState,
    player: PlayerId,
    upgrade_to: CardKind,
) -> Result<Option<CardKind>, EngineError> {
    state.check_player(player)?;

    let hand = state.hand(player)?;
    let Some((index, source, eligible)) = MINEABLE.into_iter().find_map(|treasure| {
        let index = hand.position(treasure)?;
        Some((index, treasure, treasure.mine_upgrade()?))
    }) else {
        tracing::debug!(%player, "mine: no treasure to upgrade");
        return Ok(None);
    };

    if upgrade_to != eligible {
        tracing::warn!(%player, %source, %upgrade_to, "mine: upgrade mismatch");
        return Err(EngineError::UpgradeMismatch {
            eligible,
            requested: upgrade_to,
        });
    }
    if state.supply().count(eligible) == 0 {
        tracing::warn!(%player, %eligible, "mine: upgrade pile empty");
        return Err(EngineError::SupplyExhausted(eligible));
    }

    // Trashing frees a hand slot for the upgrade.
    let gain_to = state.config().mine_gain_to;
    if gain_to != PileKind::Hand {
        state.ensure_room(player, gain_to, 1)?;
    }

    state.trash_from_hand(player, index)?;
    state.gain_card(player, eligible, gain_to)?;

    tracing::debug!(%player, %source, %eligible, "mine resolved");
    Ok(Some(source))
}
