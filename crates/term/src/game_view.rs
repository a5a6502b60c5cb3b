//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. Only the 20 visible
//! board rows are drawn; the two hidden buffer rows at the top stay off
//! screen, exactly like the engine's coordinate system minus the window.

use blockfall_core::{GameState, Piece, TETROMINOS};
use blockfall_types::{Cell as BoardCell, Phase, BOARD_WIDTH, HIDDEN_ROWS, VISIBLE_HEIGHT};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the game centered in the viewport with a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (VISIBLE_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, visible window only.
        for row in 0..VISIBLE_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let value = state
                    .board()
                    .get((row + HIDDEN_ROWS) as usize, col as usize);
                if value != 0 {
                    self.draw_board_cell(&mut fb, start_x, start_y, row as u16, col as u16, value);
                } else {
                    self.draw_empty_cell(&mut fb, start_x, start_y, row as u16, col as u16);
                }
            }
        }

        match state.phase() {
            Phase::Play => {
                self.draw_ghost(&mut fb, state, start_x, start_y);
                self.draw_piece(&mut fb, state.piece(), start_x, start_y);
                if state.paused() {
                    self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
                }
            }
            Phase::Line => {
                self.draw_highlight_rows(&mut fb, state, start_x, start_y);
            }
            Phase::Start => {
                let level_line = format!("STARTING LEVEL: {}", state.start_level());
                self.draw_overlay(
                    &mut fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    &["PRESS SPACE TO START", &level_line],
                );
            }
            Phase::GameOver => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, &["GAME OVER"]);
            }
        }

        self.draw_side_panel(&mut fb, state, start_x + frame_w + 2, start_y);

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16) {
        let style = CellStyle {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(25, 25, 35),
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, start_x, start_y, row, col, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: BoardCell,
    ) {
        let style = CellStyle {
            fg: cell_color(value),
            bg: Rgb::new(25, 25, 35),
            bold: true,
            dim: false,
        };
        self.fill_cell(fb, start_x, start_y, row, col, '█', style);
    }

    /// Draw a piece's occupied cells, clipping the hidden rows.
    fn draw_piece(&self, fb: &mut FrameBuffer, piece: Piece, start_x: u16, start_y: u16) {
        self.draw_piece_cells(fb, piece, piece.row, start_x, start_y, '█', false);
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let ghost_row = state.ghost_row();
        if ghost_row == state.piece().row {
            return;
        }
        self.draw_piece_cells(fb, state.piece(), ghost_row, start_x, start_y, '░', true);
    }

    fn draw_piece_cells(
        &self,
        fb: &mut FrameBuffer,
        piece: Piece,
        at_row: i8,
        start_x: u16,
        start_y: u16,
        ch: char,
        dim: bool,
    ) {
        let tetromino = piece.tetromino();
        for row in 0..tetromino.side() {
            for col in 0..tetromino.side() {
                let value = tetromino.cell_at(row, col, piece.rotation);
                if value == 0 {
                    continue;
                }
                let board_row = at_row + row;
                let board_col = piece.col + col;
                if board_row < HIDDEN_ROWS as i8 {
                    continue;
                }
                let style = CellStyle {
                    fg: cell_color(value),
                    bg: Rgb::new(25, 25, 35),
                    bold: !dim,
                    dim,
                };
                self.fill_cell(
                    fb,
                    start_x,
                    start_y,
                    (board_row - HIDDEN_ROWS as i8) as u16,
                    board_col as u16,
                    ch,
                    style,
                );
            }
        }
    }

    fn draw_highlight_rows(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(25, 25, 35),
            bold: true,
            dim: false,
        };
        for (board_row, flagged) in state.highlighted_rows().iter().enumerate() {
            if !flagged || board_row < HIDDEN_ROWS as usize {
                continue;
            }
            let row = (board_row - HIDDEN_ROWS as usize) as u16;
            for col in 0..BOARD_WIDTH as u16 {
                self.fill_cell(fb, start_x, start_y, row, col, '█', style);
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        let mid_y = start_y + frame_h / 2;
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y + i as u16, line, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, state: &GameState, panel_x: u16, start_y: u16) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y + 1;
        for (name, amount) in [
            ("LEVEL", state.level()),
            ("LINES", state.line_count()),
            ("POINTS", state.points()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &format!("{}", amount), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, state.next_piece().index, panel_x, y + 1);
        y += 6;

        fb.put_str(panel_x, y, "HOLD", label);
        match state.held() {
            Some(index) => self.draw_preview(fb, index, panel_x, y + 1),
            None => fb.put_str(panel_x, y + 1, "-", value),
        }
    }

    /// Draw a shape's rotation-0 grid as a small preview.
    ///
    /// The placeholder (index 0) draws nothing, which is exactly right for
    /// the start screen.
    fn draw_preview(&self, fb: &mut FrameBuffer, index: u8, x: u16, y: u16) {
        let tetromino = &TETROMINOS[index as usize];
        for row in 0..tetromino.side() {
            for col in 0..tetromino.side() {
                let value = tetromino.cell_at(row, col, 0);
                if value == 0 {
                    continue;
                }
                let style = CellStyle {
                    fg: cell_color(value),
                    bold: true,
                    ..CellStyle::default()
                };
                fb.fill_rect(
                    x + (col as u16) * self.cell_w,
                    y + row as u16,
                    self.cell_w,
                    1,
                    '█',
                    style,
                );
            }
        }
    }
}

/// Side panel width in terminal columns (labels + preview grids).
const PANEL_WIDTH: u16 = 12;

fn cell_color(value: BoardCell) -> Rgb {
    match value {
        1 => Rgb::new(80, 220, 220),  // I
        2 => Rgb::new(240, 220, 80),  // O
        3 => Rgb::new(200, 120, 220), // T
        4 => Rgb::new(100, 220, 120), // S
        5 => Rgb::new(220, 80, 80),   // Z
        6 => Rgb::new(255, 165, 0),   // L
        _ => Rgb::new(80, 120, 220),  // J
    }
}
