//! Terminal pipe puzzle runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed
//! 16 ms tick driving the session's countdown.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pipes::clock::FrameClock;
use tui_pipes::core::{GameConfig, GameSnapshot, Session, SessionEvent};
use tui_pipes::engine::{apply_place, apply_rotate};
use tui_pipes::input::{handle_key_event, handle_mouse_event, should_quit, PointerAction};
use tui_pipes::logging;
use tui_pipes::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_pipes::types::TICK_MS;

fn main() -> Result<()> {
    logging::init_from_env()?;

    // Fail on a bad configuration before taking over the terminal.
    let config = GameConfig::from_env()?;
    let mut session = Session::new(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut clock = FrameClock::new(TICK_MS);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(clock.until_next())? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(ptr) = handle_mouse_event(mouse) {
                        if let Some(pos) = view.cell_at(&snap, viewport, ptr.col, ptr.row) {
                            let result = match ptr.action {
                                PointerAction::Place => apply_place(session, pos),
                                PointerAction::Rotate => apply_rotate(session, pos),
                            };
                            if let Err(e) = result {
                                log::debug!("{} at ({}, {}): {}", e.code(), pos.x, pos.y, e.message());
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let steps = clock.poll();
        if steps > 0 {
            session.tick(steps.saturating_mul(TICK_MS));
        }

        for ev in session.take_events() {
            match ev {
                SessionEvent::Won | SessionEvent::Lost(_) => {
                    log::info!("episode {} ended: {:?}", session.episode_id(), ev)
                }
                _ => log::trace!("{:?}", ev),
            }
        }
    }
}
