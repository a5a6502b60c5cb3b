//! Core types module - shared constants and plain data structures
//!
//! Everything in this crate is pure data with no dependencies, usable from
//! the engine, the input layer, and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//! - **Visible height**: 20 rows; rows 0-1 are a hidden buffer above the
//!   playfield where pieces spawn. A non-empty row 0 ends the game.
//!
//! # Timing
//!
//! The engine runs on a fixed 60 Hz logical clock measured in seconds.
//! Automatic gravity is a per-level frame count ([`FRAMES_PER_DROP`])
//! converted to seconds via [`TARGET_SECONDS_PER_FRAME`]. Completed rows
//! stay highlighted for [`LINE_HIGHLIGHT_SECONDS`] before they collapse.
//!
//! # Scoring
//!
//! Classic batch scoring: clearing 1/2/3/4 rows in one merge is worth
//! 40/100/300/1200 points times `(level + 1)` ([`LINE_SCORES`]).

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows, including the hidden buffer).
pub const BOARD_HEIGHT: u8 = 22;

/// Rows actually shown to the player.
pub const VISIBLE_HEIGHT: u8 = 20;

/// Hidden buffer rows above the visible playfield.
pub const HIDDEN_ROWS: u8 = BOARD_HEIGHT - VISIBLE_HEIGHT;

/// Column a freshly spawned piece is re-centered to.
pub const SPAWN_COL: i8 = (BOARD_WIDTH / 2) as i8;

/// Duration of one logical frame (60 FPS fixed timestep).
pub const TARGET_SECONDS_PER_FRAME: f32 = 1.0 / 60.0;

/// How long completed rows stay highlighted before they collapse.
pub const LINE_HIGHLIGHT_SECONDS: f32 = 0.5;

/// Frames between automatic gravity steps, indexed by level.
///
/// Levels past the end of the table clamp to the last entry (1 frame).
pub const FRAMES_PER_DROP: [u8; 30] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    1,
];

/// Base points for clearing N rows in one batch, before the `(level + 1)`
/// multiplier. Index 0 is the no-clear case.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A single board cell.
///
/// 0 is empty; 1-7 identify the tetromino kind that filled the cell (and
/// therefore its color). Every stored value is in `[0, 7]`.
pub type Cell = u8;

/// The phases of a game session.
///
/// Transitions are driven exclusively by the engine's `tick`:
/// `Start -> Play` on confirm, `Play -> Line` when rows complete,
/// `Line -> Play` when the highlight expires, `Play -> GameOver` when the
/// hidden top row fills, and `GameOver -> Start` on confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Play,
    Line,
    GameOver,
}

/// Edge-triggered input sampled once per tick.
///
/// Each flag means "this was pressed since the previous tick", so a held
/// key fires its action exactly once. Outside the PLAY phase a few flags
/// are reused for menu navigation: `rotate` raises the start level,
/// `soft_drop` lowers it, and `hard_drop` confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub rotate: bool,
    pub soft_drop: bool,
    pub hard_drop: bool,
    pub hold: bool,
    pub release_hold: bool,
    pub pause: bool,
}

/// Domain events emitted by the engine during a tick.
///
/// The engine performs no I/O; a presentation layer reads the tick's event
/// list to decide what to draw or play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Start level raised on the start screen (carries the new value).
    StartLevelRaised(u32),
    /// Start level lowered on the start screen (carries the new value).
    StartLevelLowered(u32),
    /// A fresh game began (board reset, first pieces spawned).
    GameStarted,
    /// The active piece shifted one column.
    PieceMoved,
    /// The active piece rotated clockwise.
    PieceRotated,
    /// A rotation was rejected; the piece kept its prior state.
    RotationRejected,
    /// The active piece advanced one row without landing.
    SoftDropped,
    /// A hard drop was performed.
    HardDropped,
    /// The active piece merged into the board.
    PieceLanded,
    /// The active piece entered (or swapped with) the hold slot.
    PieceHeld,
    /// The hold slot was pushed out to become the next piece.
    HoldReleased,
    /// Pending rows collapsed (carries the batch size).
    LinesCleared(u32),
    /// The level advanced (carries the new level).
    LevelUp(u32),
    /// The pause flag flipped (carries the new state).
    PauseToggled(bool),
    /// The hidden top row filled; the session ended.
    GameOver,
}
