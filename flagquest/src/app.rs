use std::time::{Duration as StdDuration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::style::Style;
use ratatui::Frame;
use tachyonfx::Duration;

use flagquest_core::{Catalog, FlagStore, RoundController, RoundId};
use flagquest_widgets::background::BackgroundWidget;
use flagquest_widgets::feedback::Feedback;
use flagquest_widgets::popup::PopupWidget;
use flagquest_widgets::theme::Theme;

use crate::config::Config;
use crate::effects::{self, FxManager};
use crate::screens::main_menu::MainMenuScreen;
use crate::screens::quiz::QuizScreen;
use crate::screens::Screen;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    MainMenu,
    Playing,
    /// The country data never loaded; only quitting is possible
    LoadFailed,
}

/// Main application state
pub struct App {
    pub phase: GamePhase,
    pub game: Option<RoundController>,
    catalog: Catalog,
    flags: FlagStore,
    reveal_window: StdDuration,
    /// Armed when a flag is revealed; checked at fire time against the
    /// round that scheduled it
    hide_at: Option<(RoundId, Instant)>,
    load_error: Option<String>,
    pub tick: u64,
    pub fx: FxManager,
    prev_phase: Option<GamePhase>,

    // Screens
    pub main_menu: MainMenuScreen,
    pub quiz: QuizScreen,
}

impl App {
    pub fn new(catalog: Catalog, flags: FlagStore, config: &Config) -> Self {
        let mut fx = FxManager::default();
        // Title shimmer runs forever on main menu
        fx.add_unique_effect("title_shimmer", effects::title_shimmer());

        Self {
            phase: GamePhase::MainMenu,
            game: None,
            catalog,
            flags,
            reveal_window: config.reveal_window(),
            hide_at: None,
            load_error: None,
            tick: 0,
            fx,
            prev_phase: None,
            main_menu: MainMenuScreen::new(),
            quiz: QuizScreen::new(),
        }
    }

    /// An app that only shows the data-load diagnostic
    pub fn with_load_error(message: impl Into<String>, config: &Config) -> Self {
        let mut app = Self::new(Catalog::default(), FlagStore::default(), config);
        app.phase = GamePhase::LoadFailed;
        app.load_error = Some(message.into());
        app
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Animated backdrop behind every screen
        let bg = BackgroundWidget::new(self.tick);
        frame.render_widget(bg, area);

        match self.phase {
            GamePhase::MainMenu => self.main_menu.render(frame, &self.game),
            GamePhase::Playing => self.quiz.render(frame, &self.game),
            GamePhase::LoadFailed => self.render_load_failed(frame),
        }

        // Apply all tachyonfx effects on top of rendered content
        let tick_duration = Duration::from_millis(33); // ~30fps
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    fn render_load_failed(&self, frame: &mut Frame) {
        let detail = self.load_error.as_deref().unwrap_or("unknown error");
        let popup = PopupWidget::new("Data Error")
            .border_color(Theme::INCORRECT)
            .line(
                "Could not load game data.".to_string(),
                Style::default().fg(Theme::BRIGHT_TEXT),
            )
            .line(detail.to_string(), Style::default().fg(Theme::MUTED_TEXT))
            .line(String::new(), Style::default())
            .line("[q] Quit".to_string(), Style::default().fg(Theme::GOLD))
            .size(70, 40);
        frame.render_widget(popup, frame.area());
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.phase == GamePhase::LoadFailed {
            return matches!(key.code, KeyCode::Char('q') | KeyCode::Esc);
        }

        let action = match self.phase {
            GamePhase::MainMenu => self.main_menu.handle_key(key),
            GamePhase::Playing => self.quiz.handle_key(key),
            GamePhase::LoadFailed => None,
        };

        self.process_action(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let GamePhase::Playing = self.phase {
            let action = self.quiz.handle_mouse(mouse);
            self.process_action(action);
        }
    }

    pub fn handle_resize(&mut self, _w: u16, _h: u16) {
        // Ratatui handles resize automatically
    }

    pub fn tick(&mut self) {
        self.tick += 1;

        // Detect phase changes and trigger transition effects
        if self.prev_phase != Some(self.phase) {
            self.fx
                .add_unique_effect("screen_transition", effects::screen_transition());

            // Re-add title shimmer when returning to main menu
            if self.phase == GamePhase::MainMenu {
                self.fx
                    .add_unique_effect("title_shimmer", effects::title_shimmer());
            }

            self.prev_phase = Some(self.phase);
        }

        // Reveal window: the deadline stays armed even if the player
        // answers first; the controller re-checks the round at fire time.
        if let Some((round, deadline)) = self.hide_at {
            if Instant::now() >= deadline {
                self.hide_at = None;
                if let Some(game) = &mut self.game {
                    if game.auto_hide(round) {
                        self.fx.add_unique_effect("flag_hide", effects::flag_hide());
                    }
                }
            }
        }
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::NewGame) => {
                self.game = Some(RoundController::new(self.catalog.clone()));
                self.phase = GamePhase::Playing;
                self.open_round(true);
            }
            Some(ScreenAction::SubmitGuess) => {
                if let Some(game) = &mut self.game {
                    let typed = self.quiz.input().to_string();
                    if let Some(outcome) = game.submit_guess(&typed) {
                        let flash = if outcome.is_correct() {
                            effects::correct_flash()
                        } else {
                            effects::incorrect_flash()
                        };
                        self.fx.add_unique_effect("verdict_flash", flash);
                        self.quiz.show_result(&outcome);
                    }
                }
            }
            Some(ScreenAction::NextRound) => {
                self.open_round(false);
            }
            Some(ScreenAction::BackToMenu) => {
                self.game = None;
                self.hide_at = None;
                self.phase = GamePhase::MainMenu;
            }
            None => {}
        }

        false
    }

    /// Open a round: draw a country, resolve its flag art, and arm the
    /// auto-hide once the flag is up. `fresh` also resets the score.
    fn open_round(&mut self, fresh: bool) {
        self.hide_at = None;
        self.quiz.reset_round();

        let Some(game) = &mut self.game else {
            return;
        };
        let started = if fresh {
            game.start_game()
        } else {
            game.start_new_round()
        };
        let Some(round) = started else {
            // Empty catalog: no round starts
            self.quiz
                .set_feedback(Feedback::error("No countries available to play."));
            return;
        };

        let code = match game.current_code() {
            Some(code) => code.to_string(),
            None => return,
        };
        match self.flags.art_for(&code) {
            Ok(art) => {
                self.quiz.flag = Some(art.clone());
                if game.flag_loaded(round) {
                    self.hide_at = Some((round, Instant::now() + self.reveal_window));
                    self.fx
                        .add_unique_effect("flag_reveal", effects::flag_reveal());
                }
            }
            Err(err) => {
                // The round stays open; the player can still guess
                self.quiz.flag = None;
                self.quiz
                    .set_feedback(Feedback::error(format!("Error: {err}")));
            }
        }
    }
}

/// Actions that screens can return
#[derive(Debug, Clone)]
pub enum ScreenAction {
    Quit,
    NewGame,
    SubmitGuess,
    NextRound,
    BackToMenu,
}
