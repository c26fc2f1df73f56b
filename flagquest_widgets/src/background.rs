use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// Animated backdrop: slow diagonal color drift over the base tone
pub struct BackgroundWidget {
    pub tick: u64,
}

impl BackgroundWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for BackgroundWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = (self.tick % 720) as f64;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let base_r = 16i16;
                let base_g = 19i16;
                let base_b = 28i16;

                let drift = ((x as f64 * 0.12 + y as f64 * 0.35 + t * 0.025).sin() * 3.0) as i16;

                let r = (base_r + drift).clamp(0, 255) as u8;
                let g = (base_g + drift).clamp(0, 255) as u8;
                let b = (base_b + drift * 2).clamp(0, 255) as u8;

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}
