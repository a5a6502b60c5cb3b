//! Game state module - the phase machine that owns board, pieces, and time
//!
//! One external [`GameState::tick`] call per logical frame drives the
//! whole session. The tick carries the current time in seconds and an
//! edge-triggered [`InputFrame`]; everything else (board, piece slots,
//! score, scheduled drop deadlines) lives inside the state value. Side
//! effects surface as [`GameEvent`]s for a presentation layer; the engine
//! itself performs no I/O.

use arrayvec::ArrayVec;

use crate::board::{Board, RowMask};
use crate::pieces::{Tetromino, TETROMINOS};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring;
use blockfall_types::{
    GameEvent, InputFrame, Phase, BOARD_HEIGHT, BOARD_WIDTH, LINE_HIGHLIGHT_SECONDS, SPAWN_COL,
};

/// Upper bound on events a single tick can emit.
const EVENTS_PER_TICK: usize = 16;

/// A piece in play: catalog index plus position and rotation.
///
/// `row`/`col` locate the shape grid's top-left corner in board
/// coordinates, hidden rows included. Offsets may be negative while every
/// occupied cell still lands inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub index: u8,
    pub row: i8,
    pub col: i8,
    pub rotation: u8,
}

impl Piece {
    /// A piece of the given kind at the grid origin, rotation 0.
    pub fn new(index: u8) -> Self {
        debug_assert!(index <= 7);
        Self {
            index,
            row: 0,
            col: 0,
            rotation: 0,
        }
    }

    /// Shape definition for this piece.
    pub fn tetromino(&self) -> &'static Tetromino {
        &TETROMINOS[self.index as usize]
    }

    /// The single collision/boundary oracle.
    ///
    /// Every occupied cell of the current rotation must land inside the
    /// grid on an empty board cell. Used by movement, rotation, drops,
    /// hold swaps, and the landed check alike; there is no kick system -
    /// an invalid position is simply rejected.
    pub fn is_valid(&self, board: &Board) -> bool {
        let tetromino = self.tetromino();
        let side = tetromino.side();
        for row in 0..side {
            for col in 0..side {
                if tetromino.cell_at(row, col, self.rotation) == 0 {
                    continue;
                }
                let board_row = self.row + row;
                let board_col = self.col + col;
                if board_row < 0 || board_row >= BOARD_HEIGHT as i8 {
                    return false;
                }
                if board_col < 0 || board_col >= BOARD_WIDTH as i8 {
                    return false;
                }
                if board.get(board_row as usize, board_col as usize) != 0 {
                    return false;
                }
            }
        }
        true
    }

    /// Commit the piece's occupied cells into the board.
    ///
    /// The position must have been validated first.
    pub fn merge_into(&self, board: &mut Board) {
        let tetromino = self.tetromino();
        let side = tetromino.side();
        for row in 0..side {
            for col in 0..side {
                let value = tetromino.cell_at(row, col, self.rotation);
                if value != 0 {
                    board.set((self.row + row) as usize, (self.col + col) as usize, value);
                }
            }
        }
    }
}

/// Complete session state, advanced one phase step per tick.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    piece: Piece,
    next: Piece,
    held: Option<u8>,
    pending_rows: RowMask,
    pending_count: u32,
    source: Box<dyn PieceSource>,
    phase: Phase,
    start_level: u32,
    level: u32,
    line_count: u32,
    points: u32,
    paused: bool,
    time: f32,
    next_drop_time: f32,
    highlight_end_time: f32,
    events: ArrayVec<GameEvent, EVENTS_PER_TICK>,
}

impl GameState {
    /// Create a session with the default seeded generator.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(SimpleRng::new(seed)))
    }

    /// Create a session with an injected piece source.
    pub fn with_source(source: Box<dyn PieceSource>) -> Self {
        Self {
            board: Board::new(),
            piece: Piece::new(0),
            next: Piece::new(0),
            held: None,
            pending_rows: [false; BOARD_HEIGHT as usize],
            pending_count: 0,
            source,
            phase: Phase::Start,
            start_level: 0,
            level: 0,
            line_count: 0,
            points: 0,
            paused: false,
            time: 0.0,
            next_drop_time: 0.0,
            highlight_end_time: 0.0,
            events: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    /// Kind index in the hold slot, if occupied.
    pub fn held(&self) -> Option<u8> {
        self.held
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Per-row highlight mask. Only meaningful during the LINE phase;
    /// otherwise it holds stale data from the previous clear.
    pub fn highlighted_rows(&self) -> &RowMask {
        &self.pending_rows
    }

    /// Row the active piece would land on. Render-only preview.
    pub fn ghost_row(&self) -> i8 {
        let mut probe = self.piece;
        while probe.is_valid(&self.board) {
            probe.row += 1;
        }
        probe.row - 1
    }

    /// Ordered domain events emitted by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Advance one logical frame.
    ///
    /// `time` is the caller's monotonic clock in seconds; `input` carries
    /// edge-triggered deltas sampled since the previous tick.
    pub fn tick(&mut self, time: f32, input: &InputFrame) {
        self.events.clear();
        self.time = time;
        match self.phase {
            Phase::Start => self.update_start(input),
            Phase::Play => self.update_play(input),
            Phase::Line => self.update_line(),
            Phase::GameOver => self.update_game_over(input),
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }

    fn draw_piece(&mut self) -> Piece {
        Piece::new(self.source.next_index())
    }

    fn update_start(&mut self, input: &InputFrame) {
        if input.rotate {
            self.start_level += 1;
            self.push_event(GameEvent::StartLevelRaised(self.start_level));
        }
        if input.soft_drop && self.start_level > 0 {
            self.start_level -= 1;
            self.push_event(GameEvent::StartLevelLowered(self.start_level));
        }

        if input.hard_drop {
            self.board.clear();
            self.level = self.start_level;
            self.line_count = 0;
            self.points = 0;
            self.held = None;
            self.paused = false;
            self.piece = self.draw_piece();
            self.piece.col = SPAWN_COL;
            self.next = self.draw_piece();
            self.next_drop_time = self.time + scoring::drop_interval(self.level);
            self.phase = Phase::Play;
            self.push_event(GameEvent::GameStarted);
        }
    }

    fn update_play(&mut self, input: &InputFrame) {
        if input.pause {
            self.paused = !self.paused;
            self.push_event(GameEvent::PauseToggled(self.paused));
        }
        if self.paused {
            return;
        }

        if input.move_left {
            self.try_shift(-1);
        } else if input.move_right {
            self.try_shift(1);
        }
        if input.rotate {
            self.try_rotate();
        }

        if input.soft_drop && self.soft_drop() {
            self.push_event(GameEvent::SoftDropped);
        }
        if input.hard_drop {
            self.push_event(GameEvent::HardDropped);
            while self.soft_drop() {}
        }
        // Gravity catch-up. Every successful step (and every spawn)
        // reschedules from the current tick's time, which bounds the loop.
        while self.time >= self.next_drop_time {
            if self.soft_drop() {
                self.push_event(GameEvent::SoftDropped);
            }
        }

        if input.hold {
            self.hold_piece();
        }
        if input.release_hold {
            self.release_hold();
        }

        let (count, mask) = self.board.find_full_rows();
        self.pending_count = count;
        self.pending_rows = mask;
        if count > 0 {
            self.phase = Phase::Line;
            self.highlight_end_time = self.time + LINE_HIGHLIGHT_SECONDS;
        }

        // Checked last: a filled hidden row ends the game even when it
        // completed lines on the same tick.
        if !self.board.row_is_empty(0) {
            self.phase = Phase::GameOver;
            self.push_event(GameEvent::GameOver);
        }
    }

    fn update_line(&mut self) {
        if self.time < self.highlight_end_time {
            return;
        }

        self.board.clear_rows(&self.pending_rows);
        self.line_count += self.pending_count;
        self.points += scoring::points_for(self.level, self.pending_count);
        self.push_event(GameEvent::LinesCleared(self.pending_count));

        if self.line_count >= scoring::lines_for_next_level(self.start_level, self.level) {
            self.level += 1;
            self.push_event(GameEvent::LevelUp(self.level));
        }

        self.phase = Phase::Play;
    }

    fn update_game_over(&mut self, input: &InputFrame) {
        if input.hard_drop {
            self.phase = Phase::Start;
        }
    }

    fn try_shift(&mut self, delta: i8) {
        let mut moved = self.piece;
        moved.col += delta;
        if moved.is_valid(&self.board) {
            self.piece = moved;
            self.push_event(GameEvent::PieceMoved);
        }
    }

    fn try_rotate(&mut self) {
        let mut rotated = self.piece;
        rotated.rotation = (rotated.rotation + 1) % 4;
        if rotated.is_valid(&self.board) {
            self.piece = rotated;
            self.push_event(GameEvent::PieceRotated);
        } else {
            self.push_event(GameEvent::RotationRejected);
        }
    }

    /// One gravity step. Returns true while the piece keeps falling; false
    /// means it landed, merged, and the next piece spawned.
    fn soft_drop(&mut self) -> bool {
        self.piece.row += 1;
        if !self.piece.is_valid(&self.board) {
            self.piece.row -= 1;
            self.piece.merge_into(&mut self.board);
            self.push_event(GameEvent::PieceLanded);
            self.spawn_piece();
            return false;
        }
        self.next_drop_time = self.time + scoring::drop_interval(self.level);
        true
    }

    /// Promote the preview into play and draw a fresh preview behind it.
    ///
    /// The new active piece is re-centered horizontally and left
    /// unvalidated: if it overlaps the stack, the row-0 game-over check at
    /// the end of the tick ends the session.
    fn spawn_piece(&mut self) {
        self.piece = self.next;
        self.piece.col = SPAWN_COL;
        self.next = self.draw_piece();
        self.next_drop_time = self.time + scoring::drop_interval(self.level);
    }

    fn hold_piece(&mut self) {
        match self.held {
            None => {
                self.held = Some(self.piece.index);
                self.spawn_piece();
                self.push_event(GameEvent::PieceHeld);
            }
            Some(held_index) => {
                // In-place swap of shape only, and only when the held
                // shape fits at the active position/rotation.
                let swapped = Piece {
                    index: held_index,
                    ..self.piece
                };
                if swapped.is_valid(&self.board) {
                    self.held = Some(self.piece.index);
                    self.piece = swapped;
                    self.push_event(GameEvent::PieceHeld);
                }
            }
        }
    }

    fn release_hold(&mut self) {
        if let Some(held_index) = self.held.take() {
            self.next = Piece::new(held_index);
            self.push_event(GameEvent::HoldReleased);
        }
    }
}
