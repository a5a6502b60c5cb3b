//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule and no I/O. Given the same seed (or
//! an injected piece source), the same tick times, and the same input
//! frames, a session replays identically.
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 playfield with full-row detection and compaction
//! - [`pieces`]: tetromino catalog and on-demand rotation lookup
//! - [`rng`]: seedable uniform piece generation behind [`rng::PieceSource`]
//! - [`scoring`]: batch line scores, level thresholds, gravity pacing
//! - [`game_state`]: the START/PLAY/LINE/GAMEOVER phase machine
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{InputFrame, Phase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), Phase::Start);
//!
//! // Confirm on the start screen to begin playing.
//! let confirm = InputFrame { hard_drop: true, ..InputFrame::default() };
//! game.tick(0.0, &confirm);
//! assert_eq!(game.phase(), Phase::Play);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used items for convenience.
pub use board::{Board, RowMask};
pub use game_state::{GameState, Piece};
pub use pieces::{kind, Tetromino, TETROMINOS};
pub use rng::{PieceSource, SequenceSource, SimpleRng};
