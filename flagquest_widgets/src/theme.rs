use ratatui::style::Color;

/// Color theme for the quiz TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(16, 19, 28);
    pub const PANEL_BG: Color = Color::Rgb(26, 30, 46);

    // Flag display
    pub const FLAG_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const FLAG_BACK: Color = Color::Rgb(52, 58, 86);

    // Feedback states
    pub const CORRECT: Color = Color::Rgb(6, 214, 160);
    pub const INCORRECT: Color = Color::Rgb(230, 57, 70);
    pub const ERROR: Color = Color::Rgb(255, 140, 66);

    // Input box
    pub const INPUT_ACTIVE: Color = Color::Rgb(76, 201, 240);
    pub const INPUT_LOCKED: Color = Color::Rgb(70, 75, 95);

    // Action buttons
    pub const SUBMIT_COLOR: Color = Color::Rgb(76, 201, 240);
    pub const NEXT_COLOR: Color = Color::Rgb(6, 214, 160);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const SCORE_COLOR: Color = Color::Rgb(255, 214, 10);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);
}
