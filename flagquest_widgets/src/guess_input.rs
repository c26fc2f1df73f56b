use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::theme::Theme;

/// The guess text field. Locked after a guess is judged, re-enabled and
/// cleared when the next round opens.
pub struct GuessInputWidget<'a> {
    value: &'a str,
    enabled: bool,
}

impl<'a> GuessInputWidget<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for GuessInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 8 {
            return;
        }

        let border_color = if self.enabled {
            Theme::INPUT_ACTIVE
        } else {
            Theme::INPUT_LOCKED
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                " Your guess ",
                Style::default().fg(Theme::MUTED_TEXT),
            ));

        let inner = block.inner(area);
        block.render(area, buf);

        let text_style = if self.enabled {
            Style::default().fg(Theme::BRIGHT_TEXT)
        } else {
            Style::default().fg(Theme::DIM_TEXT)
        };

        // Keep the tail visible when the value outgrows the box
        let visible_width = inner.width.saturating_sub(1) as usize;
        let chars: Vec<char> = self.value.chars().collect();
        let start = chars.len().saturating_sub(visible_width);
        let visible: String = chars[start..].iter().collect();

        let mut spans = vec![Span::styled(visible, text_style)];
        if self.enabled {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default()
                    .fg(Theme::INPUT_ACTIVE)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}
