//! Terminal gridfall runner.
//!
//! The loop delivers key commands as they arrive and one gravity tick every
//! `GRAVITY_MS`, so commands and ticks are totally ordered; the engine never
//! sees two at once.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::Engine;
use gridfall::input::{command_for_key, should_quit};
use gridfall::term::{render_rows, TerminalRenderer};
use gridfall::types::GRAVITY_MS;

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
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1);
    let mut engine = Engine::new(seed);

    let gravity = Duration::from_millis(GRAVITY_MS);
    let mut last_tick = Instant::now();

    loop {
        term.draw(&render_rows(&engine.snapshot()))?;

        // Wait for input, but never past the next gravity deadline.
        let timeout = gravity
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_key(key.code) {
                        engine.apply(command);
                    }
                }
            }
        }

        if last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
