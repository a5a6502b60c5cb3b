//! Input layer - turns crossterm key events into edge-triggered frames
//!
//! The engine samples input once per tick as rising-edge deltas. This crate
//! provides the key map and an [`InputCollector`] that accumulates press
//! events between ticks into one [`blockfall_types::InputFrame`].

mod collector;
mod map;

pub use collector::InputCollector;
pub use map::{apply_key_press, should_quit};
