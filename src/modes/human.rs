use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use super::scheduler::TickScheduler;
use crate::game::{Direction, GameEngine, GameState, Speed, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    speed: Speed,
    scheduler: TickScheduler,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(mut engine: GameEngine) -> Self {
        let speed = engine.config().speed;
        let state = engine.idle();

        Self {
            engine,
            state,
            speed,
            scheduler: TickScheduler::stopped(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
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

        // Render at 30 FPS (33ms per frame), independent of the tick rate
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

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

                // Game logic tick; pending while no game is running
                _ = self.scheduler.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, self.speed);
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

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => self.queue_turn(direction),
                KeyAction::Start => self.start_game(),
                KeyAction::SelectSpeed(speed) => self.select_speed(speed),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn queue_turn(&mut self, direction: Direction) {
        if self.state.queue_direction(direction) {
            tracing::trace!(?direction, "turn queued");
        }
    }

    /// Start control: fresh game at the selected speed
    fn start_game(&mut self) {
        self.state = self.engine.reset();
        self.scheduler.arm(self.speed.tick_interval());
        self.metrics.on_game_start();
        tracing::info!(speed = %self.speed, "game started");
    }

    /// Change the tick speed; a running game keeps its state and ticks at the new rate
    fn select_speed(&mut self, speed: Speed) {
        self.speed = speed;
        if self.state.is_running() {
            self.scheduler.arm(speed.tick_interval());
            tracing::info!(%speed, "tick speed changed");
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.advance(&mut self.state);
        self.metrics.record(&outcome);

        match outcome {
            TickOutcome::Penalty {
                collision,
                ng_count,
            } => {
                tracing::info!(?collision, ng_count, limit = self.state.ng_limit, "NG penalty");
            }
            TickOutcome::GameOver { collision } => {
                self.scheduler.stop();
                tracing::info!(?collision, score = self.state.score, "game over");
            }
            TickOutcome::Moved { ate_food: true } => {
                tracing::debug!(score = self.state.score, "food eaten");
            }
            TickOutcome::Moved { ate_food: false } => {}
            TickOutcome::Skipped => self.scheduler.stop(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Position, RunState, Snake};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode() -> HumanMode {
        HumanMode::new(GameEngine::with_seed(GameConfig::default(), 11).unwrap())
    }

    fn press(mode: &mut HumanMode, code: KeyCode) {
        mode.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_starts_idle() {
        let mode = mode();
        assert_eq!(mode.state.run_state, RunState::Idle);
        assert_eq!(mode.speed, Speed::Normal);
        assert!(!mode.scheduler.is_armed());
    }

    #[test]
    fn test_turns_ignored_while_idle() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Up);
        assert!(mode.state.input_queue.is_empty());
    }

    #[tokio::test]
    async fn test_start_arms_scheduler() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Enter);

        assert!(mode.state.is_running());
        assert_eq!(mode.scheduler.period(), Some(Duration::from_millis(150)));

        press(&mut mode, KeyCode::Up);
        assert_eq!(mode.state.input_queue.last(), Some(Direction::Up));
    }

    #[tokio::test]
    async fn test_speed_change_keeps_game_state() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Enter);
        mode.update_game();
        let before = mode.state.clone();

        press(&mut mode, KeyCode::Char('3'));

        assert_eq!(mode.speed, Speed::Fast);
        assert_eq!(mode.scheduler.period(), Some(Duration::from_millis(100)));
        assert_eq!(mode.state, before);
    }

    #[test]
    fn test_speed_selected_while_idle_applies_on_start() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Char('1'));
        assert!(!mode.scheduler.is_armed());
        assert_eq!(mode.speed, Speed::Slow);
    }

    #[tokio::test]
    async fn test_game_over_stops_scheduler() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Enter);
        mode.state.snake =
            Snake::from_segments(vec![Position::new(380, 0)], Direction::Right).unwrap();
        mode.state.ng_count = 9;

        mode.update_game();

        assert!(mode.state.is_game_over());
        assert!(!mode.scheduler.is_armed());
        assert_eq!(mode.metrics.games_played, 1);

        // Restart resets everything
        press(&mut mode, KeyCode::Char('r'));
        assert!(mode.state.is_running());
        assert_eq!(mode.state.ng_count, 0);
        assert_eq!(mode.state.snake.len(), 3);
        assert!(mode.scheduler.is_armed());
    }

    #[test]
    fn test_quit() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Char('q'));
        assert!(mode.should_quit);
    }
}
