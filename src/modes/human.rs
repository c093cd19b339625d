use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, Session};
use crate::input::{InputHandler, KeyAction};
use crate::persistence::ScoreStore;
use crate::render::Renderer;

/// Display refresh driving both simulation and drawing
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

pub struct HumanMode<S> {
    session: Session<S>,
    renderer: Renderer,
    input_handler: InputHandler,
    epoch: Instant,
    should_quit: bool,
}

impl<S: ScoreStore> HumanMode<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self {
            session: Session::new(config, store),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            epoch: Instant::now(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Late frames are not replayed; the session's accumulator already
        // accounts for the elapsed time.
        let mut frame_timer = interval(FRAME_INTERVAL);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("Human mode started");

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Simulate and render one frame
                _ = frame_timer.tick() => {
                    let ticks = self.session.frame(self.now());
                    if ticks > 1 {
                        debug!("Caught up {} ticks in one frame", ticks);
                    }

                    let snapshot = self.session.snapshot();
                    let metrics = self.session.metrics();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            "Human mode finished after {} games, best {}",
            self.session.metrics().games_played,
            self.session.high_score()
        );
        Ok(())
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let now = self.now();
        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => {
                if !self.session.turn(direction) {
                    debug!("Ignored reversal to {:?}", direction);
                }
            }
            KeyAction::Start => self.session.start(now),
            KeyAction::Pause => self.session.toggle_pause(now),
            KeyAction::Restart => {
                info!("Restarting");
                self.session.restart(now);
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
