//! Single-ply heuristic move selection
//!
//! Simple and fast, makes a fairly smart but beatable player.
//!
//! The algorithm:
//! 1. If any potential-win line is one mark short of completion, take its
//!    single empty cell. The players are not distinguished, so this either
//!    wins on the spot or blocks the opponent's win, whichever applies.
//! 2. Otherwise weight every empty cell: for each potential-win line through
//!    it, add that line's current mark count. Lines holding both players'
//!    marks can never be completed and contribute nothing.
//! 3. Pick uniformly among the empty cells with the maximum weight. A
//!    maximum of zero (no potential lines left anywhere) degenerates to a
//!    uniform pick over all empty cells.

use rand::Rng;

use crate::grid::{Cell, Coord, Grid3};
use crate::rules::{is_line_potential_win, marks_in_line, LINE_DIRS};

/// Pick a move by single-ply line scoring.
///
/// The acting player does not appear: completing one's own line and
/// blocking the opponent's are deliberately treated identically.
#[must_use]
pub fn heuristic_move(grid: &Grid3<Cell>, win_length: usize, rng: &mut impl Rng) -> usize {
    if let Some(index) = find_completion(grid, win_length) {
        return index;
    }

    let weight = cell_weights(grid, win_length);

    let mut max_weight = 0u32;
    let mut candidates: Vec<usize> = Vec::new();
    for index in 0..grid.len() {
        if !grid[index].is_empty() {
            continue;
        }
        if weight[index] > max_weight {
            max_weight = weight[index];
            candidates.clear();
        }
        if weight[index] == max_weight {
            candidates.push(index);
        }
    }
    debug_assert!(!candidates.is_empty(), "heuristic_move requires an empty cell");
    candidates[rng.random_range(0..candidates.len())]
}

/// Find the empty cell of the first line that is one mark short of winning.
fn find_completion(grid: &Grid3<Cell>, win_length: usize) -> Option<usize> {
    let size = grid.size();
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                let origin = Coord::new(x as u8, y as u8, z as u8);
                for dir in LINE_DIRS {
                    if !is_line_potential_win(grid, origin, dir, win_length) {
                        continue;
                    }
                    if marks_in_line(grid, origin, dir, win_length) != win_length - 1 {
                        continue;
                    }
                    // The line has exactly one empty cell; walk to it.
                    let (mut cx, mut cy, mut cz) =
                        (i32::from(origin.x), i32::from(origin.y), i32::from(origin.z));
                    for _ in 0..win_length {
                        let cell = Coord::new(cx as u8, cy as u8, cz as u8);
                        if grid.get(cell).is_empty() {
                            return Some(cell.to_index(size));
                        }
                        cx += i32::from(dir.0);
                        cy += i32::from(dir.1);
                        cz += i32::from(dir.2);
                    }
                }
            }
        }
    }
    None
}

/// Weight every empty cell by the marks on the potential-win lines
/// through it.
fn cell_weights(grid: &Grid3<Cell>, win_length: usize) -> Grid3<u32> {
    let size = grid.size();
    let mut weight: Grid3<u32> = Grid3::with_size(size);
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                let origin = Coord::new(x as u8, y as u8, z as u8);
                for dir in LINE_DIRS {
                    if !is_line_potential_win(grid, origin, dir, win_length) {
                        continue;
                    }
                    let marks = marks_in_line(grid, origin, dir, win_length) as u32;
                    let (mut cx, mut cy, mut cz) =
                        (i32::from(origin.x), i32::from(origin.y), i32::from(origin.z));
                    for _ in 0..win_length {
                        let cell = Coord::new(cx as u8, cy as u8, cz as u8);
                        if grid.get(cell).is_empty() {
                            weight[cell.to_index(size)] += marks;
                        }
                        cx += i32::from(dir.0);
                        cy += i32::from(dir.1);
                        cz += i32::from(dir.2);
                    }
                }
            }
        }
    }
    weight
}
