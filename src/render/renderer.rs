use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use rand::Rng;

use crate::game::{Board, Cell, Collision, Round, RoundEnd, RoundResult};
use crate::metrics::GameMetrics;
use crate::modes::Screen;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, screen: &Screen, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Main area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Center the main area horizontally
        let main_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match screen {
            Screen::Title => {
                frame.render_widget(self.render_title(metrics), main_area);
            }
            Screen::Playing(driver) => {
                let round = driver.round();
                frame.render_widget(self.render_stats(round, metrics), chunks[0]);
                frame.render_widget(self.render_grid(round), main_area);
            }
            Screen::Result(result) => {
                frame.render_widget(self.render_result(result), main_area);
            }
        }

        frame.render_widget(self.render_controls(screen), chunks[2]);
    }

    fn render_grid<R: Rng>(&self, round: &Round<R>) -> Paragraph<'_> {
        let snake = round.snake();
        let apple = round.apple_position();
        let mut lines = Vec::new();

        for y in 0..Board::HEIGHT {
            let mut spans = Vec::new();

            for x in 0..Board::WIDTH {
                let cell = Cell::new(x, y);

                let span = if cell == snake.head() {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snake.body().contains(&cell) {
                    Span::styled("■ ", Style::default().fg(Color::Green))
                } else if cell == apple {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
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

    fn render_stats<R: Rng>(&self, round: &Round<R>, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Points: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                round.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                round.snake().len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_title(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Snake Game",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.high_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.rounds_played.to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::raw("    "),
                Span::styled("Wins: ", Style::default().fg(Color::Yellow)),
                Span::styled(metrics.wins.to_string(), Style::default().fg(Color::White)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_result(&self, result: &RoundResult) -> Paragraph<'_> {
        let (banner, color, reason) = match result.end {
            RoundEnd::Won => ("You Win", Color::Green, "The snake is fully grown"),
            RoundEnd::Lost(Collision::Border) => ("You Lose", Color::Red, "Hit the wall"),
            RoundEnd::Lost(Collision::SelfBite) => ("You Lose", Color::Red, "Bit itself"),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                banner,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![Span::styled(reason, Style::default().fg(Color::Gray))]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    result.carried_score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to go back or ", Style::default().fg(Color::Gray)),
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
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, screen: &Screen) -> Paragraph<'_> {
        let text = match screen {
            Screen::Playing(_) => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to turn (-1 point) | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" to continue | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![text]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Apple, Snake};
    use crate::modes::RoundDriver;
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn draw_buffer(screen: &Screen, metrics: &GameMetrics) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, screen, metrics))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(screen: &Screen, metrics: &GameMetrics) -> String {
        draw_buffer(screen, metrics)
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_title_shows_high_score() {
        let text = draw(&Screen::Title, &GameMetrics::new(42));
        assert!(text.contains("Snake Game"));
        assert!(text.contains("High Score: 42"));
    }

    #[test]
    fn test_title_shows_rounds_and_wins() {
        let mut metrics = GameMetrics::default();
        metrics.on_round_over(&RoundResult {
            end: RoundEnd::Won,
            score: 40,
        });
        metrics.on_round_over(&RoundResult {
            end: RoundEnd::Lost(Collision::SelfBite),
            score: 12,
        });

        let text = draw(&Screen::Title, &metrics);
        assert!(text.contains("Rounds: 2"));
        assert!(text.contains("Wins: 1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_playing_shows_points_snake_and_apple() {
        let apple = Apple::with_position(Cell::new(8, 8), StdRng::seed_from_u64(3));
        let round = Round::from_parts(Snake::new(), apple, 50);
        let screen = Screen::Playing(RoundDriver::new(round, Duration::from_millis(500)));

        let buffer = draw_buffer(&screen, &GameMetrics::default());
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();

        assert!(text.contains("Points: 50"));
        assert!(text.contains("Length: 3"));

        let segments: Vec<_> = buffer
            .content
            .iter()
            .filter(|cell| cell.symbol() == "■")
            .collect();
        assert_eq!(segments.len(), 3);
        // Exactly one of them is drawn as the head
        assert_eq!(
            segments.iter().filter(|cell| cell.fg == Color::Cyan).count(),
            1
        );
        assert_eq!(
            buffer.content.iter().filter(|cell| cell.symbol() == "●").count(),
            1
        );
    }

    #[test]
    fn test_win_shows_score() {
        let result = RoundResult {
            end: RoundEnd::Won,
            score: 37,
        };
        let text = draw(&Screen::Result(result), &GameMetrics::default());
        assert!(text.contains("You Win"));
        assert!(text.contains("Score: 37"));
    }

    #[test]
    fn test_loss_shows_zero() {
        let result = RoundResult {
            end: RoundEnd::Lost(Collision::Border),
            score: 37,
        };
        let text = draw(&Screen::Result(result), &GameMetrics::default());
        assert!(text.contains("You Lose"));
        assert!(text.contains("Hit the wall"));
        assert!(text.contains("Score: 0"));
    }
}
