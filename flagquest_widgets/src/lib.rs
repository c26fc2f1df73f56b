pub mod action_bar;
pub mod background;
pub mod feedback;
pub mod flag;
pub mod guess_input;
pub mod popup;
pub mod score_banner;
pub mod theme;
