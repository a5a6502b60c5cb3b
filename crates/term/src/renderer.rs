//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Draws are diffed against the previous frame so a quiet board costs a
//! handful of cursor moves per tick instead of a full-screen rewrite.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, diffing against the previously drawn frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let same_size = self
            .last
            .as_ref()
            .is_some_and(|prev| prev.width() == fb.width() && prev.height() == fb.height());

        let mut style: Option<CellStyle> = None;
        if same_size {
            let prev = self.last.take().unwrap();
            for y in 0..fb.height() {
                let mut x = 0;
                while x < fb.width() {
                    if prev.get(x, y) == fb.get(x, y) {
                        x += 1;
                        continue;
                    }
                    // Changed run: one cursor move, then print until the
                    // buffers agree again.
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                    while x < fb.width() && prev.get(x, y) != fb.get(x, y) {
                        self.print_cell(fb, x, y, &mut style)?;
                        x += 1;
                    }
                }
            }
        } else {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            for y in 0..fb.height() {
                self.stdout.queue(cursor::MoveTo(0, y))?;
                for x in 0..fb.width() {
                    self.print_cell(fb, x, y, &mut style)?;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn print_cell(
        &mut self,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        current: &mut Option<CellStyle>,
    ) -> Result<()> {
        let cell = fb.get(x, y).unwrap_or_default();
        if *current != Some(cell.style) {
            self.apply_style(cell.style)?;
            *current = Some(cell.style);
        }
        self.stdout.queue(Print(cell.ch))?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
