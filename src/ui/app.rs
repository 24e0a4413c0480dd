//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::constants::{PLAY_INTERVAL_MAX_MS, PLAY_INTERVAL_MIN_MS};
use crate::input::{self, ArrayKind};
use crate::playback::{Advance, PlaybackController, SilentObserver, StepObserver};
use crate::trace::{produce_trace_for, Trace};
use crate::ui::panes::{self, StatusRenderData};
use crate::ui::sound::BellObserver;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Startup settings, usually filled from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub algorithm: Algorithm,
    /// Initial array; regenerated from `kind` and `size` on `r`
    pub input: Vec<i64>,
    pub kind: ArrayKind,
    pub size: usize,
    pub interval_ms: u64,
    pub sound: bool,
}

/// The main application state
pub struct App {
    pub controller: PlaybackController,

    pub algorithm: Algorithm,

    /// The array the current trace was produced from
    pub input: Vec<i64>,

    /// Shape and length used when regenerating
    pub kind: ArrayKind,
    pub size: usize,

    /// Delay between steps while playing
    pub play_interval: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let observer: Box<dyn StepObserver> = if config.sound {
            Box::new(BellObserver::stdout())
        } else {
            Box::new(SilentObserver)
        };
        let interval_ms = config
            .interval_ms
            .clamp(PLAY_INTERVAL_MIN_MS, PLAY_INTERVAL_MAX_MS);

        let mut app = App {
            controller: PlaybackController::with_observer(observer),
            algorithm: config.algorithm,
            input: config.input,
            kind: config.kind,
            size: config.size,
            play_interval: Duration::from_millis(interval_ms),
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.rebuild_trace();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.tick();
                self.last_play_time = Instant::now();
            }

            // Poll no longer than one play interval so fast playback keeps up
            let timeout = self.play_interval.min(Duration::from_millis(50));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// One auto-play step
    fn tick(&mut self) {
        match self.controller.step_forward() {
            Advance::Moved => {
                self.status_message = "Playing...".to_string();
            }
            Advance::Complete => {
                self.is_playing = false;
                self.status_message = "Sort complete".to_string();
            }
        }
    }

    /// Re-run the selected algorithm on the current input
    fn rebuild_trace(&mut self) {
        self.is_playing = false;
        match produce_trace_for(self.algorithm, &self.input) {
            Ok(trace) => {
                info!(
                    algorithm = %self.algorithm,
                    len = self.input.len(),
                    steps = trace.len(),
                    "trace loaded"
                );
                self.status_message = format!(
                    "{}: {} steps",
                    self.algorithm.label(),
                    trace.len()
                );
                self.controller.load(trace);
            }
            Err(e) => {
                warn!(algorithm = %self.algorithm, error = %e, "trace rejected");
                self.status_message = format!("Error: {}", e);
                self.controller
                    .load(Trace::empty(Some(self.algorithm), &self.input));
            }
        }
    }

    fn regenerate(&mut self) {
        self.input = input::generate(self.kind, self.size);
        self.rebuild_trace();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Bars on the left, info column on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let view = self.controller.view();
        let title = format!(
            "{} · {} · n={}",
            self.algorithm.label(),
            self.kind,
            self.input.len()
        );

        panes::render_bars_pane(frame, columns[0], &view, &title);
        panes::render_info_pane(frame, columns[1], self.algorithm, &view);
        panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                position: view.position(),
                total: view.total,
                is_playing: self.is_playing,
                is_complete: self.controller.is_complete(),
                interval_ms: self.play_interval.as_millis() as u64,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let navigates = matches!(
            key.code,
            KeyCode::Left
                | KeyCode::Right
                | KeyCode::Enter
                | KeyCode::Backspace
                | KeyCode::Char('1'..='9')
        );
        // An empty trace has no positions to move between
        if navigates && self.controller.total() == 0 {
            self.is_playing = false;
            self.status_message = "Nothing to animate".to_string();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.controller.step_forward() == Advance::Moved {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.algorithm = self.algorithm.next();
                self.rebuild_trace();
            }
            KeyCode::BackTab => {
                self.algorithm = self.algorithm.prev();
                self.rebuild_trace();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.controller.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at start".to_string()
                };
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = match self.controller.step_forward() {
                    Advance::Moved => "Stepped forward".to_string(),
                    Advance::Complete => "Sort complete".to_string(),
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.controller.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.controller.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.regenerate();
            }
            KeyCode::Char('k') | KeyCode::Char('K') => {
                self.kind = self.kind.next();
                self.regenerate();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_interval(self.play_interval.as_millis() as u64 / 2);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.set_interval(self.play_interval.as_millis() as u64 * 2);
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.status_message = "Paused".to_string();
            return;
        }
        if self.controller.total() == 0 {
            self.status_message = "Nothing to play".to_string();
            return;
        }
        // Play from the top again once the end has been reached
        if self.controller.is_at_end() {
            self.controller.rewind_to_start();
        }
        self.is_playing = true;
        self.last_play_time = Instant::now()
            .checked_sub(self.play_interval)
            .unwrap_or(Instant::now());
        self.status_message = "Playing...".to_string();
    }

    fn set_interval(&mut self, ms: u64) {
        let ms = ms.clamp(PLAY_INTERVAL_MIN_MS, PLAY_INTERVAL_MAX_MS);
        self.play_interval = Duration::from_millis(ms);
        self.status_message = format!("Step interval {}ms", ms);
    }
}
