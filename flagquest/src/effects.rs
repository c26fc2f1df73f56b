use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

// ─── Effect Factories ────────────────────────────────────────────────

const DARK: Color = Color::Rgb(16, 19, 28);

/// Screen transition: content sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (400, Interpolation::CubicOut),
    )
}

/// Subtle gold shimmer for the title on the main menu
pub fn title_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}

/// The flag materializing when the reveal window opens
pub fn flag_reveal() -> Effect {
    fx::coalesce((300, Interpolation::QuadOut))
}

/// The flag dissolving away when the reveal window closes
pub fn flag_hide() -> Effect {
    fx::dissolve((250, Interpolation::QuadIn))
}

/// Quick green pulse on a correct answer
pub fn correct_flash() -> Effect {
    let green = Color::Rgb(6, 214, 160);
    let shift = fx::fade_to_fg(green, (150, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(green, (500, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back])
}

/// Quick red pulse on a wrong answer
pub fn incorrect_flash() -> Effect {
    let red = Color::Rgb(230, 57, 70);
    let shift = fx::fade_to_fg(red, (150, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(red, (500, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back])
}
