//! Ambassador: return copies of a card to the supply; everyone else gains one.

use smallvec::SmallVec;

use crate::cards::CardKind;
use crate::core::{EngineError, GameState, PileKind, PlayerId, MAX_PLAYERS};

/// Resolve Ambassador for `player`, returning `copies` of `kind`.
///
/// `copies` must be 1 or 2 and the hand must hold that many. The copies go
/// back to the supply, then each other player, starting at `player`'s left,
/// gains one copy to their discard pile while the supply lasts.
///
/// All checks run first; on `Err` the state is unchanged.
pub fn ambassador(
    state: &mut GameState,
    player: PlayerId,
    kind: CardKind,
    copies: usize,
) -> Result<(), EngineError> {
    state.check_player(player)?;

    if !(1..=2).contains(&copies) {
        tracing::warn!(%player, copies, "ambassador: invalid copy count");
        return Err(EngineError::InvalidCopyCount { requested: copies });
    }

    let held = state.hand(player)?.count_of(kind);
    if held < copies {
        tracing::warn!(%player, %kind, held, copies, "ambassador: not enough copies");
        return Err(EngineError::InsufficientCopies {
            player,
            kind,
            requested: copies,
            held,
        });
    }

    let available = state.supply().count(kind) as usize + copies;
    let recipients: SmallVec<[PlayerId; MAX_PLAYERS]> =
        player.others(state.player_count()).take(available).collect();
    for &recipient in &recipients {
        state.ensure_room(recipient, PileKind::Discard, 1)?;
    }

    state.remove_from_hand(player, kind, copies);
    state.return_to_supply(kind, copies as u32);
    for &recipient in &recipients {
        state.gain_card(recipient, kind, PileKind::Discard)?;
    }

    tracing::debug!(%player, %kind, copies, gifts = recipients.len(), "ambassador resolved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);
    const P3: PlayerId = PlayerId::new(3);

    #[test]
    fn test_zero_copies_rejected() {
        let mut state = GameState::builder()
            .hand(P0, [CardKind::Estate])
            .build()
            .unwrap();
        let before = state.clone();

        assert_eq!(
            ambassador(&mut state, P0, CardKind::Estate, 0),
            Err(EngineError::InvalidCopyCount { requested: 0 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_single_copy_four_players() {
        let mut state = GameState::builder()
            .player_count(4)
            .supply_pile(CardKind::Curse, 10)
            .hand(P2, [CardKind::Curse, CardKind::Gold])
            .build()
            .unwrap();

        ambassador(&mut state, P2, CardKind::Curse, 1).unwrap();

        assert_eq!(state.hand(P2).unwrap().as_slice(), &[CardKind::Gold]);
        for other in [P3, P0, P1] {
            assert_eq!(state.discard(other).unwrap().as_slice(), &[CardKind::Curse]);
        }
        assert!(state.discard(P2).unwrap().is_empty());
        // +1 returned, -3 given
        assert_eq!(state.supply().count(CardKind::Curse), 8);
    }

    #[test]
    fn test_gifts_stop_when_supply_runs_out() {
        let mut state = GameState::builder()
            .player_count(4)
            .supply_pile(CardKind::Province, 0)
            .hand(P0, [CardKind::Province, CardKind::Province])
            .build()
            .unwrap();

        ambassador(&mut state, P0, CardKind::Province, 2).unwrap();

        assert_eq!(state.discard(P1).unwrap().as_slice(), &[CardKind::Province]);
        assert_eq!(state.discard(P2).unwrap().as_slice(), &[CardKind::Province]);
        assert!(state.discard(P3).unwrap().is_empty());
        assert_eq!(state.supply().count(CardKind::Province), 0);
    }
}
