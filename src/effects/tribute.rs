//! Tribute: the left player reveals two cards; each distinct kind pays out
//! by category.

use smallvec::SmallVec;

use crate::cards::CardKind;
use crate::core::{EngineError, GameState, PileKind, PlayerId};

/// Cards revealed from the left player's deck.
const REVEAL_COUNT: usize = 2;

/// Cards revealed by one Tribute, in reveal order.
pub type Revealed = SmallVec<[CardKind; REVEAL_COUNT]>;

/// Resolve Tribute for `player`, revealing from `left_player`.
///
/// Reveals up to two cards (reshuffling `left_player`'s discard pile when
/// their deck runs out) and discards them. For each distinct revealed kind:
/// Action gives +2 actions, Treasure +2 coins, Victory makes `player` draw 2.
/// A kind in several categories pays each. Returns the revealed cards.
///
/// Every placement is checked against pile capacity before the reveal, so
/// an `Err` leaves the state unchanged.
pub fn tribute(
    state: &mut GameState,
    player: PlayerId,
    left_player: PlayerId,
) -> Result<Revealed, EngineError> {
    state.check_player(player)?;

    let preview = state.preview_reveal(left_player, REVEAL_COUNT)?;
    let mut distinct = preview.clone();
    distinct.sort_unstable();
    distinct.dedup();

    // Revealing more cards than the deck holds reshuffles the discard pile
    // away before the cards land on it.
    let left = state.player(left_player)?;
    let landing = if left.deck.len() >= preview.len() {
        left.discard.len()
    } else {
        0
    };
    if landing + preview.len() > left.discard.capacity() {
        return Err(EngineError::PileOverflow {
            player: left_player,
            pile: PileKind::Discard,
            capacity: left.discard.capacity(),
        });
    }

    // Revealed cards stay drawable, so the reveal never shrinks what
    // `player` can draw.
    let victory_kinds = distinct.iter().filter(|kind| kind.categories().is_victory()).count();
    let piles = state.player(player)?;
    let drawable = piles.deck.len() + piles.discard.len();
    state.ensure_room(player, PileKind::Hand, (2 * victory_kinds).min(drawable))?;

    let mut revealed = Revealed::new();
    for _ in 0..REVEAL_COUNT {
        match state.reveal_top(left_player)? {
            Some(card) => revealed.push(card),
            None => break,
        }
    }
    for &card in &revealed {
        state.place(left_player, PileKind::Discard, card)?;
    }

    for kind in distinct {
        let categories = kind.categories();
        if categories.is_action() {
            state.num_actions += 2;
        }
        if categories.is_treasure() {
            state.coins += 2;
        }
        if categories.is_victory() {
            state.draw_cards(player, 2)?;
        }
    }

    tracing::debug!(%player, %left_player, ?revealed, "tribute resolved");
    Ok(revealed)
}
