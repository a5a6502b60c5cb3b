//! Terminal blockfall runner.
//!
//! Fixed-timestep loop: poll crossterm events until the next tick deadline,
//! collect key presses into an edge-triggered frame, advance the engine
//! once per logical frame, and draw.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{should_quit, InputCollector};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TARGET_SECONDS_PER_FRAME;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);

    let view = GameView::default();
    let mut collector = InputCollector::new();

    let clock = Instant::now();
    let tick_duration = Duration::from_secs_f32(TARGET_SECONDS_PER_FRAME);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Edge-triggered sampling: presses only. Terminal
                    // auto-repeat and release events carry no new edges.
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            return Ok(());
                        }
                        collector.key_press(key.code);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let frame = collector.take_frame();
            game.tick(clock.elapsed().as_secs_f32(), &frame);
        }
    }
}
