//! Game session orchestration
//!
//! A [`Session`] owns the cell grid and the parallel winning-line mask,
//! manages their lifecycle across resets and size changes, and exposes the
//! rules and strategies to the external turn-taking driver. The driver
//! serializes all calls; nothing here is shared across threads.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Coord, Grid3, Player};
use crate::rules::{self, GameState};
use crate::strategy::Strategy;

/// Smallest playable grid side length.
pub const MIN_GRID_SIZE: usize = 3;

/// Smallest playable winning-line length.
pub const MIN_WIN_LENGTH: usize = 3;

/// Session parameters chosen by the driver before a game starts.
///
/// There is no upper bound on the grid size here; drivers pick their own
/// limit (search cost grows with the cube of the side length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Grid side length
    pub size: usize,
    /// Winning-line length, at most `size`
    pub win_length: usize,
}

impl SessionConfig {
    #[must_use]
    pub fn new(size: usize, win_length: usize) -> Self {
        Self { size, win_length }
    }

    /// Validate the parameter ranges.
    pub fn validate(self) -> Result<(), SessionError> {
        if self.size < MIN_GRID_SIZE {
            return Err(SessionError::SizeTooSmall { size: self.size });
        }
        if self.win_length < MIN_WIN_LENGTH || self.win_length > self.size {
            return Err(SessionError::WinLengthOutOfRange {
                win_length: self.win_length,
                size: self.size,
            });
        }
        Ok(())
    }
}

/// Invalid session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("grid size {size} is below the minimum of 3")]
    SizeTooSmall { size: usize },
    #[error("winning-line length {win_length} must be between 3 and the grid size {size}")]
    WinLengthOutOfRange { win_length: usize, size: usize },
}

/// One cell as seen by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub coord: Coord,
    pub cell: Cell,
    /// Whether the cell belongs to a completed winning line
    pub winning: bool,
}

/// A game session: grid contents plus the winning-line mask.
///
/// Created once and re-used across games via [`Session::reset`]; the
/// backing storage is reallocated only when the grid size changes.
#[derive(Debug, Clone)]
pub struct Session {
    cells: Grid3<Cell>,
    winning: Grid3<bool>,
    win_length: usize,
}

impl Session {
    /// Create an unconfigured session. Every game starts with an explicit
    /// [`Session::reset`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Grid3::new(),
            winning: Grid3::new(),
            win_length: 0,
        }
    }

    /// Start a fresh game.
    ///
    /// Reallocates the grid and the winning mask only when the size changed
    /// since the previous game; both are always cleared.
    pub fn reset(&mut self, config: SessionConfig) -> Result<(), SessionError> {
        config.validate()?;
        self.cells.allocate(config.size);
        self.winning.allocate(config.size);
        self.cells.fill(Cell::Empty);
        self.winning.fill(false);
        self.win_length = config.win_length;
        tracing::debug!(size = config.size, win_length = config.win_length, "session reset");
        Ok(())
    }

    /// Grid side length
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Winning-line length for the current game
    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Read access to the cell grid
    #[inline]
    pub fn grid(&self) -> &Grid3<Cell> {
        &self.cells
    }

    /// Read access to the winning-line mask
    #[inline]
    pub fn winning(&self) -> &Grid3<bool> {
        &self.winning
    }

    /// Place one mark at a flat cell index.
    ///
    /// The target must be empty; the driver validates moves before
    /// committing them.
    pub fn place_mark(&mut self, index: usize, player: Player) {
        debug_assert!(
            self.cells[index].is_empty(),
            "cell {index} is already occupied"
        );
        self.cells[index] = Cell::Mark(player);
    }

    /// Decide win, draw or non-final state for the current position.
    #[must_use]
    pub fn check_game_state(&self) -> GameState {
        rules::check_game_state(&self.cells, self.win_length)
    }

    /// Fill the winning mask from the current position. Called by the
    /// driver once [`Session::check_game_state`] reports a win.
    pub fn mark_winning_lines(&mut self) {
        rules::mark_winning_lines(&self.cells, self.win_length, &mut self.winning);
    }

    /// Pick a move for an automated player.
    #[must_use]
    pub fn choose_move(&self, strategy: Strategy, player: Player, rng: &mut impl Rng) -> usize {
        let index = strategy.choose_move(&self.cells, self.win_length, player, rng);
        tracing::trace!(?strategy, ?player, index, "strategy chose a move");
        index
    }

    /// Iterate all cells with their winning-line flags, in flat-index
    /// order, for the rendering collaborator.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let size = self.cells.size();
        (0..self.cells.len()).map(move |index| CellView {
            coord: Coord::from_index(index, size),
            cell: self.cells[index],
            winning: self.winning[index],
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
