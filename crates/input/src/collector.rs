//! Accumulates key presses between ticks into one edge-triggered frame.

use blockfall_types::InputFrame;
use crossterm::event::KeyCode;

use crate::map::apply_key_press;

/// Collects `KeyEventKind::Press` events until the next tick consumes them.
///
/// Taking the frame resets it, so each press contributes to exactly one
/// tick: a key held across ticks fires its action once. Terminal
/// auto-repeat must be filtered out by the caller (ignore `Repeat` events).
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    frame: InputFrame,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns false for unbound keys.
    pub fn key_press(&mut self, code: KeyCode) -> bool {
        apply_key_press(&mut self.frame, code)
    }

    /// Hand the accumulated frame to the tick and reset for the next one.
    pub fn take_frame(&mut self) -> InputFrame {
        std::mem::take(&mut self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_accumulate_until_taken() {
        let mut collector = InputCollector::new();
        collector.key_press(KeyCode::Left);
        collector.key_press(KeyCode::Up);

        let frame = collector.take_frame();
        assert!(frame.move_left);
        assert!(frame.rotate);
        assert!(!frame.hard_drop);
    }

    #[test]
    fn taking_the_frame_resets_it() {
        let mut collector = InputCollector::new();
        collector.key_press(KeyCode::Char(' '));
        assert!(collector.take_frame().hard_drop);
        assert_eq!(collector.take_frame(), InputFrame::default());
    }

    #[test]
    fn repeated_presses_within_one_tick_collapse() {
        let mut collector = InputCollector::new();
        collector.key_press(KeyCode::Left);
        collector.key_press(KeyCode::Left);
        let frame = collector.take_frame();
        assert!(frame.move_left);
    }
}
