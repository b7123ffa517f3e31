//! Uniform-random move selection

use rand::Rng;

use crate::grid::{Cell, Grid3};

/// Pick a uniformly random empty cell.
///
/// Makes for a trivially beatable player, useful as a baseline opponent and
/// for exercising the rest of the engine in tests.
#[must_use]
pub fn random_move(grid: &Grid3<Cell>, rng: &mut impl Rng) -> usize {
    let empty: Vec<usize> = (0..grid.len())
        .filter(|&index| grid[index].is_empty())
        .collect();
    debug_assert!(!empty.is_empty(), "random_move requires an empty cell");
    empty[rng.random_range(0..empty.len())]
}
