//! Multi-card turn tests.
//!
//! Plays several effects through `EffectResolver` against one state. Set
//! `RUST_LOG=dominion_effects=trace` to see every card movement.

use dominion_effects::cards::CardKind;
use dominion_effects::core::{EngineError, GameState, PlayerId};
use dominion_effects::effects::{Effect, EffectOutcome, EffectResolver};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn three_player_game() -> GameState {
    GameState::builder()
        .player_count(3)
        .seed(99)
        .supply_pile(CardKind::Estate, 8)
        .supply_pile(CardKind::Silver, 40)
        .supply_pile(CardKind::Gold, 30)
        .hand(
            P0,
            [
                CardKind::Copper,
                CardKind::Estate,
                CardKind::Estate,
                CardKind::Silver,
                CardKind::Copper,
            ],
        )
        .deck(P0, [CardKind::Gold, CardKind::Copper, CardKind::Duchy])
        .deck(P1, [CardKind::Estate, CardKind::Smithy, CardKind::Gold])
        .hand(P2, [CardKind::Curse; 6])
        .deck(P2, [CardKind::Copper; 4])
        .build()
        .unwrap()
}

/// A full action phase keeps every card accounted for.
#[test]
fn test_action_phase() {
    init_tracing();
    let mut state = three_player_game();
    let census = state.census();

    let outcomes = EffectResolver::resolve_sequence(
        &mut state,
        P0,
        &[
            Effect::baron(true),
            Effect::mine(CardKind::Silver),
            Effect::tribute(),
            Effect::ambassador(CardKind::Estate, 1),
        ],
    )
    .unwrap();

    assert_eq!(outcomes.len(), 4);
    assert_eq!(outcomes[1], EffectOutcome::Trashed(Some(CardKind::Copper)));
    assert_eq!(
        outcomes[2],
        EffectOutcome::Revealed([CardKind::Gold, CardKind::Smithy].into_iter().collect())
    );

    assert_eq!(state.num_buys, 1);
    assert_eq!(state.coins, 4 + 2);
    assert_eq!(state.num_actions, 2);
    assert_eq!(
        state.discard(P1).unwrap().as_slice(),
        &[CardKind::Gold, CardKind::Smithy, CardKind::Estate]
    );
    assert_eq!(state.discard(P2).unwrap().as_slice(), &[CardKind::Estate]);
    assert!(!state.hand(P0).unwrap().contains(CardKind::Estate));
    assert_eq!(state.census(), census);
}

/// Minion resets the acting hand and the six-card hand, not the empty one.
#[test]
fn test_minion_in_three_player_game() {
    init_tracing();
    let mut state = three_player_game();

    EffectResolver::resolve(&mut state, P0, &Effect::minion_redraw()).unwrap();

    assert_eq!(state.hand(P0).unwrap().len(), 3 + 1);
    assert_eq!(state.discard(P2).unwrap().as_slice(), &[CardKind::Curse; 6]);
    assert_eq!(state.hand(P2).unwrap().as_slice(), &[CardKind::Copper; 4]);
    assert!(state.hand(P1).unwrap().is_empty());
    assert_eq!(state.deck(P1).unwrap().len(), 3);
}

/// A failing play in the middle stops the turn but keeps earlier effects.
#[test]
fn test_failed_play_stops_sequence() {
    init_tracing();
    let mut state = three_player_game();

    let result = EffectResolver::resolve_sequence(
        &mut state,
        P0,
        &[Effect::minion_coins(), Effect::mine(CardKind::Gold), Effect::baron(false)],
    );

    assert_eq!(
        result,
        Err(EngineError::UpgradeMismatch {
            eligible: CardKind::Silver,
            requested: CardKind::Gold,
        })
    );
    assert_eq!(state.coins, 2);
    assert_eq!(state.num_buys, 0);
    assert!(state.trash().is_empty());
}

/// Score reflects gained victory cards and Gardens.
#[test]
fn test_score_after_gains() {
    let mut state = GameState::builder()
        .supply_pile(CardKind::Estate, 8)
        .hand(P0, [CardKind::Gardens, CardKind::Copper, CardKind::Copper])
        .deck(P0, [CardKind::Copper; 6])
        .build()
        .unwrap();

    assert_eq!(state.score_for(P0).unwrap(), 0);

    EffectResolver::resolve(&mut state, P0, &Effect::baron(false)).unwrap();

    // Ten cards owned: one Estate plus one point from Gardens.
    assert_eq!(state.full_deck_count(P0, CardKind::Estate).unwrap(), 1);
    assert_eq!(state.score_for(P0).unwrap(), 2);
}
