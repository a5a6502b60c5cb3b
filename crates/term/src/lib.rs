//! Terminal presentation layer.
//!
//! Three pieces: a styled-character [`fb::FrameBuffer`], a diffing
//! [`renderer::TerminalRenderer`] that owns the raw-mode/alternate-screen
//! lifecycle, and a pure [`game_view::GameView`] that maps engine state
//! into a framebuffer.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
