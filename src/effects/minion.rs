//! Minion: +1 Action, then either +2 coins or a hand reset.

use smallvec::SmallVec;

use crate::core::{EngineError, GameState, PileKind, PlayerId, MAX_PLAYERS};

/// Cards drawn after discarding a hand.
const REDRAW: usize = 4;

/// Hands strictly larger than this are reset for other players.
const OPPONENT_HAND_LIMIT: usize = 4;

/// Resolve Minion for `player`.
///
/// `gain_coins` takes priority: +2 coins and nothing else. Otherwise, with
/// `discard_and_draw`, the player discards their hand and draws 4, and so
/// does every other player holding more than 4 cards when Minion resolves.
pub fn minion(
    state: &mut GameState,
    player: PlayerId,
    gain_coins: bool,
    discard_and_draw: bool,
) -> Result<(), EngineError> {
    state.check_player(player)?;

    let resetting = !gain_coins && discard_and_draw;
    let mut targets: SmallVec<[PlayerId; MAX_PLAYERS]> = SmallVec::new();
    if resetting {
        targets.push(player);
        for other in player.others(state.player_count()) {
            if state.hand(other)?.len() > OPPONENT_HAND_LIMIT {
                targets.push(other);
            }
        }
        for &target in &targets {
            let piles = state.player(target)?;
            state.ensure_room(target, PileKind::Discard, piles.hand.len())?;

            // The redraw lands in an emptied hand and may reshuffle the
            // discarded one back in.
            let redraw = REDRAW.min(piles.total());
            if piles.hand.capacity() < redraw {
                return Err(EngineError::PileOverflow {
                    player: target,
                    pile: PileKind::Hand,
                    capacity: piles.hand.capacity(),
                });
            }
        }
    }

    state.num_actions += 1;

    if gain_coins {
        state.coins += 2;
        tracing::debug!(%player, "minion: +2 coins");
        return Ok(());
    }

    for &target in &targets {
        let discarded = state.discard_hand(target)?;
        let drawn = state.draw_cards(target, REDRAW)?;
        tracing::debug!(%player, %target, discarded, drawn, "minion: hand reset");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_neither_choice_only_adds_action() {
        let mut state = GameState::builder()
            .hand(P0, [CardKind::Copper; 5])
            .deck(P0, [CardKind::Gold; 5])
            .build()
            .unwrap();

        minion(&mut state, P0, false, false).unwrap();

        assert_eq!(state.num_actions, 1);
        assert_eq!(state.coins, 0);
        assert_eq!(state.hand(P0).unwrap().len(), 5);
        assert!(state.discard(P0).unwrap().is_empty());
    }

    #[test]
    fn test_threshold_is_strictly_more_than_four() {
        let mut state = GameState::builder()
            .player_count(3)
            .hand(P0, [CardKind::Copper; 2])
            .hand(P1, [CardKind::Estate; 4])
            .hand(P2, [CardKind::Estate; 5])
            .deck(P0, [CardKind::Silver; 4])
            .deck(P1, [CardKind::Silver; 4])
            .deck(P2, [CardKind::Silver; 4])
            .build()
            .unwrap();

        minion(&mut state, P0, false, true).unwrap();

        assert_eq!(state.hand(P1).unwrap().len(), 4);
        assert!(state.discard(P1).unwrap().is_empty());
        assert_eq!(state.deck(P1).unwrap().len(), 4);

        assert_eq!(state.discard(P2).unwrap().len(), 5);
        assert_eq!(state.hand(P2).unwrap().as_slice(), &[CardKind::Silver; 4]);
    }

    #[test]
    fn test_short_deck_draws_what_it_can() {
        let mut state = GameState::builder()
            .hand(P0, [CardKind::Copper; 3])
            .deck(P0, [CardKind::Gold])
            .build()
            .unwrap();

        minion(&mut state, P0, false, true).unwrap();

        // the discarded hand is reshuffled back in to finish the draw
        assert_eq!(state.hand(P0).unwrap().len(), 4);
        assert!(state.deck(P0).unwrap().is_empty());
        assert!(state.discard(P0).unwrap().is_empty());
    }
}
