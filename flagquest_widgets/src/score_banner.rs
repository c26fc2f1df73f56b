use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Projection of the score onto one line
pub struct ScoreBannerWidget {
    pub score: u32,
}

impl ScoreBannerWidget {
    pub fn new(score: u32) -> Self {
        Self { score }
    }
}

impl Widget for ScoreBannerWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Theme::MUTED_TEXT)),
            Span::styled(
                self.score.to_string(),
                Style::default()
                    .fg(Theme::SCORE_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
