pub mod main_menu;
pub mod quiz;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::app::ScreenAction;
use flagquest_core::RoundController;

/// Trait for game screens
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, game: &Option<RoundController>);
    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction>;
}
