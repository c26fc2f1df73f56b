use flagquest_core::flag::{FlagArt, Orientation, Rgb};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Smallest area the flag will draw into
pub const FLAG_MIN_WIDTH: u16 = 12;
pub const FLAG_MIN_HEIGHT: u16 = 5;

/// The flag container: banded art while revealed, a face-down cover
/// while the reveal window is over or the art never resolved.
pub struct FlagWidget<'a> {
    art: Option<&'a FlagArt>,
    hidden: bool,
}

impl<'a> FlagWidget<'a> {
    pub fn new(art: Option<&'a FlagArt>) -> Self {
        Self { art, hidden: false }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Widget for FlagWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < FLAG_MIN_WIDTH || area.height < FLAG_MIN_HEIGHT {
            return;
        }

        let border_style = Style::default().fg(Theme::FLAG_BORDER);
        render_border(area, buf, border_style);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width - 2,
            area.height - 2,
        );

        match self.art {
            Some(art) if !self.hidden => render_bands(art, inner, buf),
            _ => render_cover(inner, buf),
        }
    }
}

fn render_bands(art: &FlagArt, inner: Rect, buf: &mut Buffer) {
    if art.bands.is_empty() {
        return;
    }
    let bands = art.bands.len() as u32;

    for row in 0..inner.height {
        for col in 0..inner.width {
            let band = match art.orientation {
                Orientation::Horizontal => (row as u32 * bands) / inner.height as u32,
                Orientation::Vertical => (col as u32 * bands) / inner.width as u32,
            };
            let color = to_color(art.bands[band as usize]);
            if let Some(cell) = buf.cell_mut((inner.x + col, inner.y + row)) {
                cell.set_symbol(" ");
                cell.set_bg(color);
            }
        }
    }

    if let Some(emblem) = art.emblem {
        let x = inner.x + inner.width / 2;
        let y = inner.y + inner.height / 2;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(emblem.symbol);
            cell.set_fg(to_color(emblem.color));
        }
    }
}

/// Face-down state: shaded field with a question mark, like a card back
fn render_cover(inner: Rect, buf: &mut Buffer) {
    let back_style = Style::default().fg(Theme::FLAG_BACK).bg(Theme::PANEL_BG);
    for row in 0..inner.height {
        for col in 0..inner.width {
            if let Some(cell) = buf.cell_mut((inner.x + col, inner.y + row)) {
                cell.set_symbol("\u{2591}");
                cell.set_style(back_style);
            }
        }
    }

    let x = inner.x + inner.width / 2;
    let y = inner.y + inner.height / 2;
    buf.set_string(
        x,
        y,
        "?",
        Style::default()
            .fg(Theme::MUTED_TEXT)
            .bg(Theme::PANEL_BG)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_border(area: Rect, buf: &mut Buffer, style: Style) {
    let right = area.x + area.width - 1;
    let bottom = area.y + area.height - 1;

    buf.set_string(area.x, area.y, "\u{256d}", style);
    buf.set_string(right, area.y, "\u{256e}", style);
    buf.set_string(area.x, bottom, "\u{2570}", style);
    buf.set_string(right, bottom, "\u{256f}", style);

    for x in area.x + 1..right {
        buf.set_string(x, area.y, "\u{2500}", style);
        buf.set_string(x, bottom, "\u{2500}", style);
    }
    for y in area.y + 1..bottom {
        buf.set_string(area.x, y, "\u{2502}", style);
        buf.set_string(right, y, "\u{2502}", style);
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
