//! 3D N-in-a-row game engine
//!
//! A generalized N-in-a-row engine on a cubic grid: configurable side length,
//! configurable winning-line length, and three interchangeable move-selection
//! strategies (uniform random, single-ply heuristic, bounded minimax search).
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`grid`]: Flat cubic storage with coordinate/index conversion
//! - [`rules`]: Winning-line geometry and terminal-state detection
//! - [`strategy`]: Move-selection strategies (random, heuristic, search)
//! - [`session`]: Game session orchestrating grid lifecycle and turn data
//!
//! Rendering, input handling, and turn scheduling live in an external driver;
//! this crate only owns the game rules and the automated players.
//!
//! # Quick Start
//!
//! ```
//! use qubic::{GameState, Player, Session, SessionConfig, Strategy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut session = Session::new();
//! session.reset(SessionConfig::new(3, 3)).unwrap();
//!
//! // Human move, then an automated reply.
//! session.place_mark(0, Player::One);
//! assert_eq!(session.check_game_state(), GameState::Continue);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let reply = session.choose_move(Strategy::Heuristic, Player::Two, &mut rng);
//! session.place_mark(reply, Player::Two);
//! assert_eq!(session.check_game_state(), GameState::Continue);
//! ```
//!
//! # Performance
//!
//! Full-depth adversarial search is combinatorially infeasible even on a
//! 3x3x3 grid, so the search strategy caps its depth (3 plies by default).
//! The heuristic strategy is linear in grid volume and plays a fast,
//! fairly smart but beatable game.

pub mod grid;
pub mod rules;
pub mod session;
pub mod strategy;

// Re-export commonly used types for convenience
pub use grid::{Cell, Coord, Grid3, Player};
pub use rules::{GameState, LINE_DIRS};
pub use session::{CellView, Session, SessionConfig, SessionError};
pub use strategy::{Strategy, DEFAULT_SEARCH_DEPTH};
