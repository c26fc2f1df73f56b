use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Which affordance the bar shows: submit while the round is open, next
/// once the result is on screen. Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMode {
    Submit { enabled: bool },
    Next,
}

/// Identifies which button a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonHit {
    Submit,
    Next,
}

/// Single centered action button
pub struct ActionBarWidget {
    pub mode: ActionMode,
}

impl ActionBarWidget {
    pub fn new(mode: ActionMode) -> Self {
        Self { mode }
    }

    /// The rect the button occupies within the bar's area
    pub fn button_rect(area: Rect) -> Rect {
        let chunks = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(area);
        chunks[1]
    }

    /// Check whether a click at (col, row) hits the visible button
    pub fn hit_test(&self, area: Rect, col: u16, row: u16) -> Option<ButtonHit> {
        let rect = Self::button_rect(area);
        let inside =
            col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height;
        if !inside {
            return None;
        }
        match self.mode {
            ActionMode::Submit { enabled } => enabled.then_some(ButtonHit::Submit),
            ActionMode::Next => Some(ButtonHit::Next),
        }
    }
}

impl Widget for ActionBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 24 {
            return;
        }

        let rect = Self::button_rect(area);
        match self.mode {
            ActionMode::Submit { enabled } => {
                render_button(buf, rect, "Submit Guess", enabled, Theme::SUBMIT_COLOR);
            }
            ActionMode::Next => {
                render_button(buf, rect, "Next Flag", true, Theme::NEXT_COLOR);
            }
        }
    }
}

fn render_button(buf: &mut Buffer, area: Rect, label: &str, enabled: bool, active_color: ratatui::style::Color) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let color = if enabled { active_color } else { Theme::DIM_TEXT };
    let border_style = Style::default().fg(color);
    let text_style = if enabled {
        Style::default()
            .fg(Theme::BRIGHT_TEXT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::DIM_TEXT)
    };

    // Top border
    let mut top = String::new();
    top.push('\u{256d}');
    for _ in 1..area.width.saturating_sub(1) {
        top.push('\u{2500}');
    }
    top.push('\u{256e}');
    buf.set_string(area.x, area.y, &top, border_style);

    // Middle row (label)
    let y = area.y + 1;
    buf.set_string(area.x, y, "\u{2502}", border_style);
    let inner_w = area.width.saturating_sub(2) as usize;
    buf.set_string(area.x + 1, y, " ".repeat(inner_w), Style::default());
    let display_label: String = label.chars().take(inner_w).collect();
    let label_x = area.x + 1 + (inner_w as u16).saturating_sub(display_label.len() as u16) / 2;
    buf.set_string(label_x, y, &display_label, text_style);
    buf.set_string(area.x + area.width - 1, y, "\u{2502}", border_style);

    // Bottom border
    let y = area.y + 2;
    let mut bot = String::new();
    bot.push('\u{2570}');
    for _ in 1..area.width.saturating_sub(1) {
        bot.push('\u{2500}');
    }
    bot.push('\u{256f}');
    buf.set_string(area.x, y, &bot, border_style);
}
