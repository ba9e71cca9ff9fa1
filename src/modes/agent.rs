//! Agent mode: watch the autopilot play
//!
//! TUI mode that runs the A* autopilot against the game engine and
//! displays it playing. Playback can be paused, reset and sped up; a
//! finished episode restarts automatically.
//!
//! # Controls
//!
//! - Space: Pause/unpause
//! - R: Reset episode
//! - 1-4: Speed control (1=slow, 2=normal, 3=fast, 4=very fast)
//! - Q/Esc: Quit

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, interval};

use crate::agent::{Autopilot, Decision};
use crate::game::{GameConfig, GameEngine, GameState};
use crate::metrics::AgentStats;
use crate::render::{AgentHud, Renderer};

/// Playback speed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSpeed {
    /// Slow: 2 Hz (500ms per step)
    Slow,
    /// Normal: 8 Hz (125ms per step) - same as human mode
    Normal,
    /// Fast: 20 Hz (50ms per step)
    Fast,
    /// Very Fast: 60 Hz (16ms per step)
    VeryFast,
}

impl PlaybackSpeed {
    fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(125),
            Self::Fast => Duration::from_millis(50),
            Self::VeryFast => Duration::from_millis(16),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::VeryFast => "very fast",
        }
    }
}

/// Agent mode for watching the autopilot
pub struct AgentMode {
    engine: GameEngine,
    state: GameState,
    autopilot: Autopilot,
    stats: AgentStats,
    renderer: Renderer,
    should_quit: bool,
    paused: bool,
    speed: PlaybackSpeed,
    episode_count: usize,
    episode_done: bool,
    last_decision: Option<Decision>,
}

impl AgentMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            autopilot: Autopilot::new(),
            stats: AgentStats::default(),
            renderer: Renderer::new(),
            should_quit: false,
            paused: false,
            speed: PlaybackSpeed::Normal,
            episode_count: 0,
            episode_done: false,
            last_decision: None,
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

        // Run playback loop with cleanup
        let result = self.run_playback_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_playback_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game ticks based on speed
        let mut tick_timer = interval(self.speed.tick_interval());

        // Render at 30 FPS
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle keyboard input
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Autopilot tick
                _ = tick_timer.tick() => {
                    if !self.paused {
                        if self.episode_done {
                            self.next_episode();
                        } else {
                            self.step_autopilot();
                        }
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    let hud = AgentHud {
                        stats: &self.stats,
                        episode: self.episode_count,
                        speed: self.speed.as_str(),
                        paused: self.paused,
                        last_decision: self.last_decision,
                    };
                    terminal.draw(|frame| {
                        self.renderer.render_agent(frame, &self.state, &hud);
                    }).context("Failed to draw frame")?;
                }

                // Ctrl+C
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

    /// Decide and commit one autopilot move
    fn step_autopilot(&mut self) {
        let (result, decision) = self.autopilot.step(&mut self.engine, &mut self.state);
        self.last_decision = Some(decision);
        self.stats.record_decision(&decision);

        if result.terminated {
            self.stats.record_episode(self.state.score, self.state.steps);
            self.episode_done = true;
        }
    }

    fn next_episode(&mut self) {
        self.state = self.engine.reset();
        self.episode_count += 1;
        self.episode_done = false;
        self.last_decision = None;
    }

    /// Handle keyboard events
    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        if let Event::Key(key) = event {
            // Only process key press events
            if key.kind != KeyEventKind::Press {
                return;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('r') => {
                    self.next_episode();
                }
                KeyCode::Char('1') => {
                    self.change_speed(PlaybackSpeed::Slow, tick_timer);
                }
                KeyCode::Char('2') => {
                    self.change_speed(PlaybackSpeed::Normal, tick_timer);
                }
                KeyCode::Char('3') => {
                    self.change_speed(PlaybackSpeed::Fast, tick_timer);
                }
                KeyCode::Char('4') => {
                    self.change_speed(PlaybackSpeed::VeryFast, tick_timer);
                }
                _ => {}
            }
        }
    }

    /// Change the playback speed by swapping the tick interval
    fn change_speed(&mut self, new_speed: PlaybackSpeed, tick_timer: &mut Interval) {
        self.speed = new_speed;
        *tick_timer = interval(self.speed.tick_interval());
    }

    /// Cleanup terminal state
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
