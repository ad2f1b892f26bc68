//! Game state and the pile primitives every effect is built from.
//!
//! ## GameState
//!
//! - Per-player hand, draw pile and discard pile
//! - Shared supply and trash
//! - Turn counters (`num_actions`, `coins`, `num_buys`)
//! - Deterministic RNG for reshuffles
//!
//! ## Primitives
//!
//! `draw_card`, `reveal_top`, `discard_card`, `discard_hand`, `gain_card`,
//! `trash_from_hand` and `return_to_supply` move cards between piles. Each
//! checks its preconditions before touching anything, so an `Err` leaves the
//! state as it was. Together they conserve every card kind: a card leaves
//! one pile only to enter another.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::{EngineConfig, PileKind};
use super::error::EngineError;
use super::player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
use super::rng::GameRng;
use crate::cards::CardKind;
use crate::zones::{Pile, PlayerPiles, Supply};

/// Complete state of a game in progress.
///
/// Decoding checks the seat count and that every player pile was built with
/// the configured capacity, so a decoded state upholds the same invariants
/// as a built one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    config: EngineConfig,

    players: PlayerMap<PlayerPiles>,

    supply: Supply,

    trash: Pile,

    /// Actions remaining this turn.
    pub num_actions: u32,

    /// Coins available this turn.
    pub coins: u32,

    /// Buys remaining this turn.
    pub num_buys: u32,

    /// Deterministic RNG used for reshuffles.
    pub rng: GameRng,
}

/// Wire form of a `GameState`, validated into one on decode.
#[derive(Deserialize)]
struct GameStateRepr {
    config: EngineConfig,
    players: PlayerMap<PlayerPiles>,
    supply: Supply,
    trash: Pile,
    num_actions: u32,
    coins: u32,
    num_buys: u32,
    rng: GameRng,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = EngineError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let player_count = repr.players.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(EngineError::InvalidPlayerCount {
                requested: player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let max_pile = repr.config.max_pile;
        for (seat, piles) in repr.players.values().enumerate() {
            for kind in [PileKind::Hand, PileKind::Deck, PileKind::Discard] {
                let capacity = piles.pile(kind).capacity();
                if capacity != max_pile {
                    return Err(EngineError::Snapshot(format!(
                        "{} {kind} has capacity {capacity}, config says {max_pile}",
                        PlayerId::new(seat as u8)
                    )));
                }
            }
        }

        Ok(Self {
            config: repr.config,
            players: repr.players,
            supply: repr.supply,
            trash: repr.trash,
            num_actions: repr.num_actions,
            coins: repr.coins,
            num_buys: repr.num_buys,
            rng: repr.rng,
        })
    }
}

impl GameState {
    /// Create a state with empty piles, an empty supply and zeroed counters.
    pub fn new(player_count: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_config(player_count, seed, EngineConfig::default())
    }

    /// Create an empty state with a custom configuration.
    pub fn with_config(
        player_count: usize,
        seed: u64,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(EngineError::InvalidPlayerCount {
                requested: player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let capacity = config.max_pile;
        Ok(Self {
            config,
            players: PlayerMap::new(player_count, |_| PlayerPiles::with_capacity(capacity)),
            supply: Supply::new(),
            trash: Pile::unbounded(),
            num_actions: 0,
            coins: 0,
            num_buys: 0,
            rng: GameRng::new(seed),
        })
    }

    /// Start building a state with explicit piles.
    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::new()
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all seated players.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// The seat to `player`'s left.
    #[must_use]
    pub fn left_of(&self, player: PlayerId) -> PlayerId {
        player.left(self.player_count())
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared supply.
    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// Shared trash, oldest first.
    #[must_use]
    pub fn trash(&self) -> &Pile {
        &self.trash
    }

    /// Fail with `InvalidPlayer` unless `player` is seated.
    pub fn check_player(&self, player: PlayerId) -> Result<(), EngineError> {
        if self.players.contains(player) {
            Ok(())
        } else {
            Err(EngineError::InvalidPlayer {
                player,
                player_count: self.player_count(),
            })
        }
    }

    /// A player's piles.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerPiles, EngineError> {
        self.players.get(player).ok_or(EngineError::InvalidPlayer {
            player,
            player_count: self.player_count(),
        })
    }

    /// A player's hand.
    pub fn hand(&self, player: PlayerId) -> Result<&Pile, EngineError> {
        Ok(&self.player(player)?.hand)
    }

    /// A player's draw pile (top = last card).
    pub fn deck(&self, player: PlayerId) -> Result<&Pile, EngineError> {
        Ok(&self.player(player)?.deck)
    }

    /// A player's discard pile.
    pub fn discard(&self, player: PlayerId) -> Result<&Pile, EngineError> {
        Ok(&self.player(player)?.discard)
    }

    // === Primitives ===

    /// Take the top card of `player`'s draw pile.
    ///
    /// Reshuffles the discard pile into an empty draw pile first. Returns
    /// `None` when both are empty. The caller must place the card.
    pub fn reveal_top(&mut self, player: PlayerId) -> Result<Option<CardKind>, EngineError> {
        self.check_player(player)?;
        if self.players[player].deck.is_empty() {
            self.reshuffle(player);
        }
        Ok(self.players[player].deck.pop())
    }

    /// The cards `count` calls to `reveal_top` would return, without moving
    /// anything.
    ///
    /// A reshuffle is replayed on a copy of the RNG, so the preview matches
    /// the real reveal exactly as long as nothing else shuffles in between.
    pub fn preview_reveal(
        &self,
        player: PlayerId,
        count: usize,
    ) -> Result<Vec<CardKind>, EngineError> {
        let piles = self.player(player)?;
        let mut deck = piles.deck.as_slice().to_vec();
        let mut discard = piles.discard.as_slice().to_vec();
        let mut rng = self.rng.clone();

        let mut revealed = Vec::with_capacity(count);
        for _ in 0..count {
            if deck.is_empty() && !discard.is_empty() {
                rng.shuffle(&mut discard);
                deck = std::mem::take(&mut discard);
            }
            match deck.pop() {
                Some(card) => revealed.push(card),
                None => break,
            }
        }
        Ok(revealed)
    }

    /// Draw one card into `player`'s hand, reshuffling if the deck is empty.
    ///
    /// Returns `None`, with nothing moved, when deck and discard are both empty.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<Option<CardKind>, EngineError> {
        let piles = self.player(player)?;
        if piles.deck.is_empty() && piles.discard.is_empty() {
            tracing::trace!(%player, "draw from empty deck and discard");
            return Ok(None);
        }
        self.ensure_room(player, PileKind::Hand, 1)?;
        let Some(card) = self.reveal_top(player)? else {
            return Ok(None);
        };
        self.place(player, PileKind::Hand, card)?;
        tracing::trace!(%player, %card, "drew");
        Ok(Some(card))
    }

    /// Draw up to `count` cards, stopping early if the player runs out.
    ///
    /// Returns how many were drawn. A hand that fills up partway fails with
    /// `PileOverflow` and keeps the cards already drawn.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) -> Result<usize, EngineError> {
        let mut drawn = 0;
        for _ in 0..count {
            if self.draw_card(player)?.is_none() {
                break;
            }
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Move the hand card at `hand_index` to the discard pile.
    pub fn discard_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
    ) -> Result<CardKind, EngineError> {
        self.check_hand_index(player, hand_index)?;
        self.ensure_room(player, PileKind::Discard, 1)?;

        let len = self.players[player].hand.len();
        let card = self.players[player]
            .hand
            .remove(hand_index)
            .ok_or(EngineError::HandIndexOutOfRange {
                player,
                index: hand_index,
                len,
            })?;
        self.place(player, PileKind::Discard, card)?;
        tracing::trace!(%player, %card, "discarded");
        Ok(card)
    }

    /// Move `player`'s whole hand to the discard pile, keeping its order.
    ///
    /// Returns how many cards were discarded.
    pub fn discard_hand(&mut self, player: PlayerId) -> Result<usize, EngineError> {
        let count = self.player(player)?.hand.len();
        self.ensure_room(player, PileKind::Discard, count)?;

        let piles = &mut self.players[player];
        let cards = piles.hand.take_all();
        piles.discard.extend_unchecked(cards);
        tracing::trace!(%player, count, "discarded hand");
        Ok(count)
    }

    /// Gain a card from the supply onto one of `player`'s piles.
    ///
    /// Returns `false`, with nothing changed, if the supply has no copy.
    pub fn gain_card(
        &mut self,
        player: PlayerId,
        kind: CardKind,
        destination: PileKind,
    ) -> Result<bool, EngineError> {
        self.check_player(player)?;
        if self.supply.count(kind) == 0 {
            tracing::debug!(%player, %kind, "supply empty, nothing gained");
            return Ok(false);
        }
        self.ensure_room(player, destination, 1)?;

        self.supply.take(kind);
        self.place(player, destination, kind)?;
        tracing::trace!(%player, %kind, %destination, "gained");
        Ok(true)
    }

    /// Move the hand card at `hand_index` to the shared trash.
    pub fn trash_from_hand(
        &mut self,
        player: PlayerId,
        hand_index: usize,
    ) -> Result<CardKind, EngineError> {
        self.check_hand_index(player, hand_index)?;

        let len = self.players[player].hand.len();
        let card = self.players[player]
            .hand
            .remove(hand_index)
            .ok_or(EngineError::HandIndexOutOfRange {
                player,
                index: hand_index,
                len,
            })?;
        self.trash.extend_unchecked([card]);
        tracing::trace!(%player, %card, "trashed");
        Ok(card)
    }

    /// Add `n` copies of `kind` to the supply.
    pub fn return_to_supply(&mut self, kind: CardKind, n: u32) {
        self.supply.give_back(kind, n);
    }

    /// Remove up to `n` copies of `kind` from `player`'s hand.
    ///
    /// Returns how many were removed. The caller owns the removed cards.
    pub(crate) fn remove_from_hand(&mut self, player: PlayerId, kind: CardKind, n: usize) -> usize {
        self.players[player].hand.remove_copies(kind, n)
    }

    /// Put a card the caller holds onto one of `player`'s piles.
    pub(crate) fn place(
        &mut self,
        player: PlayerId,
        pile: PileKind,
        card: CardKind,
    ) -> Result<(), EngineError> {
        self.check_player(player)?;
        let target = self.players[player].pile_mut(pile);
        let capacity = target.capacity();
        target
            .try_push(card)
            .map_err(|_| EngineError::PileOverflow {
                player,
                pile,
                capacity,
            })
    }

    /// Fail with `PileOverflow` unless `pile` has room for `n` more cards.
    pub fn ensure_room(
        &self,
        player: PlayerId,
        pile: PileKind,
        n: usize,
    ) -> Result<(), EngineError> {
        let target = self.player(player)?.pile(pile);
        if target.remaining() < n {
            return Err(EngineError::PileOverflow {
                player,
                pile,
                capacity: target.capacity(),
            });
        }
        Ok(())
    }

    fn check_hand_index(&self, player: PlayerId, index: usize) -> Result<(), EngineError> {
        let len = self.player(player)?.hand.len();
        if index >= len {
            return Err(EngineError::HandIndexOutOfRange { player, index, len });
        }
        Ok(())
    }

    /// Move the discard pile into the (empty) draw pile in random order.
    fn reshuffle(&mut self, player: PlayerId) {
        let piles = &mut self.players[player];
        if !piles.deck.is_empty() || piles.discard.is_empty() {
            return;
        }

        let mut cards = piles.discard.take_all();
        self.rng.shuffle(&mut cards);
        tracing::debug!(%player, count = cards.len(), "reshuffled discard into deck");
        piles.deck.extend_unchecked(cards);
    }

    // === Queries ===

    /// Copies of `kind` across `player`'s hand, deck and discard.
    pub fn full_deck_count(&self, player: PlayerId, kind: CardKind) -> Result<usize, EngineError> {
        Ok(self.player(player)?.count_of(kind))
    }

    /// Victory points over every card `player` owns.
    ///
    /// Gardens is worth one point per ten cards owned, rounded down.
    pub fn score_for(&self, player: PlayerId) -> Result<i32, EngineError> {
        let piles = self.player(player)?;
        let gardens_value = (piles.total() / 10) as i32;

        Ok(piles
            .all_cards()
            .map(|card| match card {
                CardKind::Gardens => gardens_value,
                other => other.victory_points(),
            })
            .sum())
    }

    /// Copies of each kind across every pile, the supply and the trash.
    ///
    /// Effects never change this census.
    #[must_use]
    pub fn census(&self) -> FxHashMap<CardKind, u32> {
        let mut totals = FxHashMap::default();

        let piled = self
            .players
            .values()
            .flat_map(|piles| piles.all_cards())
            .chain(self.trash.iter());
        for card in piled {
            *totals.entry(card).or_insert(0) += 1;
        }
        for (kind, count) in self.supply.iter().filter(|&(_, n)| n > 0) {
            *totals.entry(kind).or_insert(0) += count;
        }

        totals
    }

    // === Snapshots ===

    /// Encode the full state, RNG position included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Builder for a `GameState` with explicit contents.
///
/// Piles are given bottom first, so the last card of a deck is drawn first.
///
/// ```
/// use dominion_effects::cards::CardKind;
/// use dominion_effects::core::{GameState, PlayerId};
///
/// let p0 = PlayerId::new(0);
/// let state = GameState::builder()
///     .player_count(2)
///     .seed(42)
///     .supply_pile(CardKind::Estate, 8)
///     .hand(p0, [CardKind::Estate, CardKind::Copper])
///     .deck(p0, [CardKind::Silver])
///     .build()
///     .unwrap();
///
/// assert_eq!(state.hand(p0).unwrap().len(), 2);
/// assert_eq!(state.deck(p0).unwrap().top(), Some(CardKind::Silver));
/// ```
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    player_count: usize,
    seed: u64,
    config: EngineConfig,
    supply: Supply,
    piles: Vec<(PlayerId, PileKind, Vec<CardKind>)>,
    trash: Vec<CardKind>,
    num_actions: u32,
    coins: u32,
    num_buys: u32,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: 0,
            config: EngineConfig::default(),
            supply: Supply::new(),
            piles: Vec::new(),
            trash: Vec::new(),
            num_actions: 0,
            coins: 0,
            num_buys: 0,
        }
    }
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn supply(mut self, supply: Supply) -> Self {
        self.supply = supply;
        self
    }

    pub fn supply_pile(mut self, kind: CardKind, count: u32) -> Self {
        self.supply.set(kind, count);
        self
    }

    pub fn hand(self, player: PlayerId, cards: impl IntoIterator<Item = CardKind>) -> Self {
        self.pile(player, PileKind::Hand, cards)
    }

    pub fn deck(self, player: PlayerId, cards: impl IntoIterator<Item = CardKind>) -> Self {
        self.pile(player, PileKind::Deck, cards)
    }

    pub fn discard(self, player: PlayerId, cards: impl IntoIterator<Item = CardKind>) -> Self {
        self.pile(player, PileKind::Discard, cards)
    }

    /// Set a player's pile, replacing anything given before.
    pub fn pile(
        mut self,
        player: PlayerId,
        pile: PileKind,
        cards: impl IntoIterator<Item = CardKind>,
    ) -> Self {
        self.piles.retain(|(p, k, _)| !(*p == player && *k == pile));
        self.piles.push((player, pile, cards.into_iter().collect()));
        self
    }

    pub fn trash(mut self, cards: impl IntoIterator<Item = CardKind>) -> Self {
        self.trash = cards.into_iter().collect();
        self
    }

    pub fn actions(mut self, n: u32) -> Self {
        self.num_actions = n;
        self
    }

    pub fn coins(mut self, n: u32) -> Self {
        self.coins = n;
        self
    }

    pub fn buys(mut self, n: u32) -> Self {
        self.num_buys = n;
        self
    }

    /// Build the state, validating seats and pile capacities.
    pub fn build(self) -> Result<GameState, EngineError> {
        let mut state = GameState::with_config(self.player_count, self.seed, self.config)?;
        let capacity = state.config.max_pile;

        for (player, pile, cards) in self.piles {
            state.check_player(player)?;
            let filled = Pile::from_cards(cards, capacity).map_err(|_| EngineError::PileOverflow {
                player,
                pile,
                capacity,
            })?;
            *state.players[player].pile_mut(pile) = filled;
        }

        state.supply = self.supply;
        state.trash.extend_unchecked(self.trash);
        state.num_actions = self.num_actions;
        state.coins = self.coins;
        state.num_buys = self.num_buys;
        Ok(state)
    }
}
