//! Move-selection strategies for automated players
//!
//! All strategies share one contract: given the current grid and the acting
//! player, return the flat index of one currently-empty cell. Calling a
//! strategy on a full grid is a caller error; drivers check for a terminal
//! state first.

pub mod heuristic;
pub mod minimax;
pub mod random;

// Re-exports for convenient access
pub use heuristic::heuristic_move;
pub use minimax::{search_move, DEFAULT_SEARCH_DEPTH};
pub use random::random_move;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid3, Player};

/// Move-selection policy for an automated player.
///
/// Mirrors the player types a driver offers: a trivially beatable random
/// player, a fast heuristic player, and a bounded adversarial search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Random,
    Heuristic,
    Search,
}

impl Strategy {
    /// Pick one empty cell for `player` on the current grid.
    ///
    /// The random source is supplied by the caller so games can be replayed
    /// deterministically in tests. [`Strategy::Search`] runs at
    /// [`DEFAULT_SEARCH_DEPTH`]; call [`search_move`] directly for a custom
    /// depth.
    #[must_use]
    pub fn choose_move(
        self,
        grid: &Grid3<Cell>,
        win_length: usize,
        player: Player,
        rng: &mut impl Rng,
    ) -> usize {
        match self {
            Strategy::Random => random_move(grid, rng),
            Strategy::Heuristic => heuristic_move(grid, win_length, rng),
            Strategy::Search => search_move(grid, win_length, player, DEFAULT_SEARCH_DEPTH),
        }
    }
}
