use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::agent::{Decision, Resolution, Strategy};
use crate::game::{GameState, Position};
use crate::metrics::{AgentStats, GameMetrics};

/// Everything the agent mode wants on screen besides the grid itself
pub struct AgentHud<'a> {
    pub stats: &'a AgentStats,
    pub episode: usize,
    pub speed: &'static str,
    pub paused: bool,
    pub last_decision: Option<Decision>,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_human(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = self.layout(frame);

        frame.render_widget(self.human_stats(state, metrics), chunks[0]);

        let game_area = self.game_area(chunks[1]);
        if state.is_alive {
            frame.render_widget(self.render_grid(game_area, state), game_area);
        } else {
            frame.render_widget(self.render_game_over(state), game_area);
        }

        frame.render_widget(self.human_controls(), chunks[2]);
    }

    pub fn render_agent(&self, frame: &mut Frame, state: &GameState, hud: &AgentHud) {
        let chunks = self.layout(frame);

        frame.render_widget(self.agent_stats_line(state, hud), chunks[0]);

        let game_area = self.game_area(chunks[1]);
        frame.render_widget(self.render_grid(game_area, state), game_area);

        frame.render_widget(self.agent_controls(hud), chunks[2]);
    }

    fn layout(&self, frame: &Frame) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area())
    }

    fn game_area(&self, area: Rect) -> Rect {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(area)[1]
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid.height() {
            let mut spans = Vec::new();

            for x in 0..state.grid.width() {
                let pos = Position::new(x, y);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if pos == state.food {
                    Span::styled(
                        "O ",
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.body().contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == state.snake.tail() {
                    // the just-vacated cell: still blocked for one step
                    Span::styled("□ ", Style::default().fg(Color::Red))
                } else if !state.grid.is_interior(pos) {
                    Span::styled("▓ ", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn human_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn agent_stats_line(&self, state: &GameState, hud: &AgentHud) -> Paragraph<'_> {
        let strategy = match hud.last_decision {
            Some(Decision {
                strategy: Strategy::Direct,
                resolution,
                ..
            }) => match resolution {
                Resolution::Planned => "direct",
                Resolution::Stalled => "direct (stalling)",
                Resolution::TailChase => "direct (tail chase)",
            },
            Some(Decision {
                strategy: Strategy::Conservative,
                resolution,
                ..
            }) => match resolution {
                Resolution::Planned => "conservative",
                Resolution::Stalled => "conservative (stalling)",
                Resolution::TailChase => "conservative (tail chase)",
            },
            None => "-",
        };

        let mut spans = vec![
            Span::styled("Episode: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                (hud.episode + 1).to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                hud.stats.best_score().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Strategy: ", Style::default().fg(Color::Yellow)),
            Span::styled(strategy, Style::default().fg(Color::Magenta)),
        ];

        if hud.paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn human_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn agent_controls(&self, hud: &AgentHud) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" reset | "),
            Span::styled("1-4", Style::default().fg(Color::Cyan)),
            Span::raw(" speed ("),
            Span::styled(hud.speed, Style::default().fg(Color::White)),
            Span::raw(") | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
