//! Bounded-depth minimax move selection
//!
//! Adversarial two-player zero-sum search over the remaining empty cells.
//! Unbounded search would play perfectly but is combinatorially infeasible
//! beyond the smallest grids, so the depth is capped; the default of 3 plies
//! keeps response times acceptable at the cost of game-theoretic optimality.

use crate::grid::{Cell, Grid3, Player};
use crate::rules::{check_game_state, GameState};

/// Score of a proven win for the searching player.
const WIN_SCORE: i32 = 1;

/// Default search depth in plies.
///
/// A fixed performance compromise independent of grid volume; callers that
/// can afford more (or less) pass their own depth to [`search_move`].
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Pick a move for `player` by minimax search to `depth` plies.
///
/// Terminal positions score +1 when `player` wins, -1 when the opponent
/// wins, and 0 for a draw; running out of depth without resolution also
/// scores 0. Maximizing nodes stop scanning candidates once a +1 child is
/// found and minimizing nodes do the symmetric cut; both are exact, since
/// no better outcome exists in a unit-score game. `depth` must be positive
/// and the grid must hold at least one empty cell.
#[must_use]
pub fn search_move(grid: &Grid3<Cell>, win_length: usize, player: Player, depth: u8) -> usize {
    debug_assert!(depth > 0, "minimax root requires a positive depth");
    debug_assert!(
        grid.iter().any(|cell| cell.is_empty()),
        "search_move requires an empty cell"
    );

    // Trial moves run on a scratch copy so the caller's grid is untouched.
    let mut scratch = grid.clone();
    let mut search = Minimax {
        grid: &mut scratch,
        win_length,
        player,
        nodes: 0,
    };
    let (score, best) = search.best_move(player, depth);
    tracing::debug!(nodes = search.nodes, score, depth, "minimax search finished");
    best.unwrap_or(0)
}

/// Search state: the scratch grid plus the fixed parameters of one search.
struct Minimax<'g> {
    grid: &'g mut Grid3<Cell>,
    win_length: usize,
    player: Player,
    nodes: u64,
}

impl Minimax<'_> {
    /// Recursive minimax over the empty cells.
    ///
    /// Returns the best achievable score for the side to move at `turn`
    /// and the cell that achieves it, or `(0, None)` at depth 0.
    fn best_move(&mut self, turn: Player, depth: u8) -> (i32, Option<usize>) {
        if depth == 0 {
            return (0, None);
        }
        let maximizing = turn == self.player;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_index = None;

        for index in 0..self.grid.len() {
            if !self.grid[index].is_empty() {
                continue;
            }
            self.nodes += 1;

            let score = self.with_trial(index, Cell::Mark(turn), |search| {
                match check_game_state(search.grid, search.win_length) {
                    GameState::Continue => search.best_move(turn.opponent(), depth - 1).0,
                    GameState::Draw => 0,
                    GameState::Won(winner) => {
                        if winner == search.player {
                            WIN_SCORE
                        } else {
                            -WIN_SCORE
                        }
                    }
                }
            });

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_index = Some(index);
                }
                if best_score >= WIN_SCORE {
                    break;
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best_index = Some(index);
                }
                if best_score <= -WIN_SCORE {
                    break;
                }
            }
        }

        match best_index {
            Some(_) => (best_score, best_index),
            // No empty cell: unreachable from a non-terminal position.
            None => (0, None),
        }
    }

    /// Place a trial mark, run `eval`, and revert the cell.
    ///
    /// The revert cannot be skipped by any exit from the evaluation body,
    /// so sibling branches always see the position they expect.
    fn with_trial<R>(&mut self, index: usize, mark: Cell, eval: impl FnOnce(&mut Self) -> R) -> R {
        self.grid[index] = mark;
        let result = eval(self);
        self.grid[index] = Cell::Empty;
        result
    }
}
