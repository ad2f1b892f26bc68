//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of a player, 0-based. Games run with 2-4 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Fewest players a game may seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game may seat.
pub const MAX_PLAYERS: usize = 4;

/// Player seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to this player's left, wrapping around the table.
    ///
    /// ```
    /// use dominion_effects::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).left(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).left(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn left(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Every other seat, in turn order starting from this player's left.
    ///
    /// ```
    /// use dominion_effects::core::PlayerId;
    ///
    /// let others: Vec<_> = PlayerId::new(1).others(4).collect();
    /// assert_eq!(others, vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(0)]);
    /// ```
    pub fn others(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..player_count).map(move |offset| Self(((self.0 as usize + offset) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ```
/// use dominion_effects::core::{PlayerId, PlayerMap};
///
/// let mut buys: PlayerMap<u32> = PlayerMap::new(3, |_| 1);
/// buys[PlayerId::new(2)] += 1;
/// assert_eq!(buys[PlayerId::new(2)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` has a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over all values.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

/// Indexing panics on a seat outside the map, like slice indexing.
/// Use `get` when the seat comes from caller input.
impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
