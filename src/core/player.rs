//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Isolation is strictly two-player: `PlayerId::ONE` moves first,
//! `PlayerId::TWO` second. `other()` flips between them.
//!
//! ## PlayerMap
//!
//! Per-player storage indexed by `PlayerId`, backed by a fixed array.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Two-player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const ONE: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a new player ID. Only 0 and 1 are valid.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Isolation has exactly two players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both players in turn order.
    ///
    /// ```
    /// use isolation_search::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(players, vec![PlayerId::ONE, PlayerId::TWO]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data with O(1) access.
///
/// ```
/// use isolation_search::core::{PlayerId, PlayerMap};
///
/// let mut moves: PlayerMap<u32> = PlayerMap::with_value(0);
/// moves[PlayerId::TWO] = 3;
/// assert_eq!(moves[PlayerId::ONE], 0);
/// assert_eq!(moves[PlayerId::TWO], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
