//! Property tests over random game states.
//!
//! Every effect either resolves and conserves cards, or fails and leaves the
//! state exactly as it was.

use proptest::prelude::*;

use dominion_effects::cards::CardKind;
use dominion_effects::core::{EngineConfig, GameState, PileKind, PlayerId, MAX_PLAYERS};
use dominion_effects::effects::{Effect, EffectOutcome, EffectResolver};

fn card_strategy() -> impl Strategy<Value = CardKind> {
    (0..CardKind::COUNT).prop_map(|i| CardKind::ALL[i])
}

fn pile_strategy() -> impl Strategy<Value = Vec<CardKind>> {
    proptest::collection::vec(card_strategy(), 0..10)
}

fn state_strategy() -> impl Strategy<Value = GameState> {
    (
        2usize..=MAX_PLAYERS,
        any::<u64>(),
        proptest::collection::vec((pile_strategy(), pile_strategy(), pile_strategy()), MAX_PLAYERS),
        proptest::collection::vec(proptest::option::of(0u32..12), CardKind::COUNT),
    )
        .prop_map(|(player_count, seed, piles, supply)| {
            let mut builder = GameState::builder().player_count(player_count).seed(seed);
            for (seat, (hand, deck, discard)) in piles.into_iter().take(player_count).enumerate() {
                let player = PlayerId::new(seat as u8);
                builder = builder.hand(player, hand).deck(player, deck).discard(player, discard);
            }
            for (&kind, count) in CardKind::ALL.iter().zip(supply) {
                if let Some(count) = count {
                    builder = builder.supply_pile(kind, count);
                }
            }
            builder.build().unwrap()
        })
}

/// Two-player states whose piles sit at or near a small capacity.
fn crowded_state_strategy() -> impl Strategy<Value = GameState> {
    (1usize..=5, any::<u64>())
        .prop_flat_map(|(capacity, seed)| {
            let pile = move || proptest::collection::vec(card_strategy(), 0..=capacity);
            (
                Just(capacity),
                Just(seed),
                proptest::collection::vec((pile(), pile(), pile()), 2),
            )
        })
        .prop_map(|(capacity, seed, piles)| {
            let mut builder = GameState::builder()
                .config(EngineConfig::default().with_max_pile(capacity))
                .seed(seed)
                .supply_pile(CardKind::Estate, 8)
                .supply_pile(CardKind::Silver, 40)
                .supply_pile(CardKind::Gold, 30);
            for (seat, (hand, deck, discard)) in piles.into_iter().enumerate() {
                let player = PlayerId::new(seat as u8);
                builder = builder.hand(player, hand).deck(player, deck).discard(player, discard);
            }
            builder.build().unwrap()
        })
}

fn effect_strategy() -> impl Strategy<Value = Effect> {
    prop_oneof![
        any::<bool>().prop_map(Effect::baron),
        (any::<bool>(), any::<bool>()).prop_map(|(gain_coins, discard_and_draw)| Effect::Minion {
            gain_coins,
            discard_and_draw,
        }),
        proptest::option::of((0..MAX_PLAYERS as u8).prop_map(PlayerId::new))
            .prop_map(|left_player| Effect::Tribute { left_player }),
        (card_strategy(), 0usize..4).prop_map(|(kind, copies)| Effect::ambassador(kind, copies)),
        card_strategy().prop_map(Effect::mine),
    ]
}

fn piles_within_capacity(state: &GameState) -> bool {
    let max = state.config().max_pile;
    state.player_ids().all(|p| {
        let piles = state.player(p).unwrap();
        [PileKind::Hand, PileKind::Deck, PileKind::Discard]
            .into_iter()
            .all(|kind| piles.pile(kind).len() <= max)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Resolved effects keep the census; failed ones change nothing.
    #[test]
    fn prop_conserve_or_unchanged(
        mut state in state_strategy(),
        seat in 0..MAX_PLAYERS as u8,
        effect in effect_strategy(),
    ) {
        let before = state.clone();
        let census = state.census();

        match EffectResolver::resolve(&mut state, PlayerId::new(seat), &effect) {
            Ok(_) => prop_assert_eq!(state.census(), census),
            Err(_) => prop_assert_eq!(&state, &before),
        }
        prop_assert!(piles_within_capacity(&state));
    }

    /// Near-full piles either resolve cleanly or refuse without a trace.
    #[test]
    fn prop_crowded_piles_conserve_or_unchanged(
        mut state in crowded_state_strategy(),
        seat in 0..2u8,
        effect in effect_strategy(),
    ) {
        let before = state.clone();
        let census = state.census();

        match EffectResolver::resolve(&mut state, PlayerId::new(seat), &effect) {
            Ok(_) => prop_assert_eq!(state.census(), census),
            Err(_) => prop_assert_eq!(&state, &before),
        }
        prop_assert!(piles_within_capacity(&state));
    }

    /// Tribute never reveals more than two cards.
    #[test]
    fn prop_tribute_reveals_at_most_two(mut state in state_strategy()) {
        let outcome = EffectResolver::resolve(&mut state, PlayerId::new(0), &Effect::tribute());

        match outcome {
            Ok(EffectOutcome::Revealed(cards)) => prop_assert!(cards.len() <= 2),
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    /// The coin choice of Minion never moves a card.
    #[test]
    fn prop_minion_coins_moves_nothing(mut state in state_strategy()) {
        let before = state.clone();

        EffectResolver::resolve(&mut state, PlayerId::new(1), &Effect::minion_coins()).unwrap();

        prop_assert_eq!(state.coins, before.coins + 2);
        prop_assert_eq!(state.num_actions, before.num_actions + 1);
        for p in state.player_ids() {
            prop_assert_eq!(state.player(p).unwrap(), before.player(p).unwrap());
        }
        prop_assert_eq!(state.supply(), before.supply());
    }

    /// A rejected Ambassador leaves the encoded state byte for byte.
    #[test]
    fn prop_rejected_ambassador_is_bit_identical(
        mut state in state_strategy(),
        kind in card_strategy(),
        copies in prop_oneof![Just(0usize), 3usize..8],
    ) {
        let bytes = state.to_bytes().unwrap();

        let effect = Effect::ambassador(kind, copies);
        let result = EffectResolver::resolve(&mut state, PlayerId::new(0), &effect);

        prop_assert!(result.is_err());
        prop_assert_eq!(state.to_bytes().unwrap(), bytes);
    }

    /// Snapshots restore the state, RNG position included.
    #[test]
    fn prop_snapshot_restores_state(mut state in state_strategy(), seat in 0..2u8) {
        let _ = EffectResolver::resolve(&mut state, PlayerId::new(seat), &Effect::minion_redraw());

        let restored = GameState::from_bytes(&state.to_bytes().unwrap()).unwrap();

        prop_assert_eq!(&restored, &state);
    }
}
