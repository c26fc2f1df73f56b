use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use flagquest_core::flag::FlagArt;
use flagquest_core::round::GuessOutcome;
use flagquest_core::RoundController;
use flagquest_widgets::action_bar::{ActionBarWidget, ActionMode, ButtonHit};
use flagquest_widgets::feedback::{Feedback, FeedbackWidget};
use flagquest_widgets::flag::{FlagWidget, FLAG_MIN_HEIGHT, FLAG_MIN_WIDTH};
use flagquest_widgets::guess_input::GuessInputWidget;
use flagquest_widgets::score_banner::ScoreBannerWidget;
use flagquest_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

const INPUT_MAX_CHARS: usize = 64;

pub struct QuizScreen {
    input: String,
    pub flag: Option<FlagArt>,
    feedback: Option<Feedback>,
    /// True once the result is on screen: typing stops and the action
    /// affordance swaps from submit to next
    locked: bool,
    action_mode: ActionMode,
    action_area: Rect,
}

impl QuizScreen {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            flag: None,
            feedback: None,
            locked: false,
            action_mode: ActionMode::Submit { enabled: false },
            action_area: Rect::default(),
        }
    }

    /// Fresh round: clear and re-enable the input, drop the feedback,
    /// show the submit affordance again
    pub fn reset_round(&mut self) {
        self.input.clear();
        self.feedback = None;
        self.locked = false;
        self.flag = None;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }

    /// The guess was judged: show the verdict and swap submit for next
    pub fn show_result(&mut self, outcome: &GuessOutcome) {
        self.feedback = Some(Feedback::from_outcome(outcome));
        self.locked = true;
    }

    fn render_header(&self, frame: &mut Frame, game: &RoundController, area: Rect) {
        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Theme::FLAG_BORDER));

        let inner = header_block.inner(area);
        frame.render_widget(header_block, area);

        let halves =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).split(inner);

        let title = Line::from(vec![
            Span::styled(
                "  FlagQuest ",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("\u{2502} ", Style::default().fg(Theme::FLAG_BORDER)),
            Span::styled(
                "Which country is this?",
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), halves[0]);

        frame.render_widget(ScoreBannerWidget::new(game.score()), halves[1]);
    }

    fn flag_rect(area: Rect) -> Rect {
        let height = area.height.clamp(FLAG_MIN_HEIGHT, 12);
        let max_width = area.width.saturating_sub(4).max(FLAG_MIN_WIDTH);
        let width = (height * 3).clamp(FLAG_MIN_WIDTH, max_width);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Screen for QuizScreen {
    fn render(&mut self, frame: &mut Frame, game: &Option<RoundController>) {
        let area = frame.area();

        let game = match game {
            Some(g) => g,
            None => return,
        };

        // Main layout: header | flag | feedback | input | actions | help
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(FLAG_MIN_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(area);

        self.render_header(frame, game, chunks[0]);

        // The flag container: art while revealed, the cover otherwise
        let flag_widget = FlagWidget::new(self.flag.as_ref()).hidden(!game.flag_visible());
        frame.render_widget(flag_widget, Self::flag_rect(chunks[1]));

        frame.render_widget(FeedbackWidget::new(self.feedback.as_ref()), chunks[2]);

        // Guess input, centered
        let input_area = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(44),
            Constraint::Min(0),
        ])
        .split(chunks[3])[1];
        let input_widget = GuessInputWidget::new(&self.input).enabled(game.in_progress());
        frame.render_widget(input_widget, input_area);

        // Action bar; remember mode and area for mouse hit-testing
        self.action_mode = if self.locked {
            ActionMode::Next
        } else {
            ActionMode::Submit {
                enabled: game.in_progress(),
            }
        };
        self.action_area = chunks[4];
        frame.render_widget(ActionBarWidget::new(self.action_mode), chunks[4]);

        // Help line
        let enter_hint = if self.locked { "] Next  [" } else { "] Submit  [" };
        let help = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled(enter_hint, Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter => {
                // Enter follows the visible affordance
                if self.locked {
                    return Some(ScreenAction::NextRound);
                }
                return Some(ScreenAction::SubmitGuess);
            }
            KeyCode::Esc => return Some(ScreenAction::BackToMenu),
            KeyCode::Backspace if !self.locked => {
                self.input.pop();
            }
            KeyCode::Char(c) if !self.locked => {
                if self.input.chars().count() < INPUT_MAX_CHARS {
                    self.input.push(c);
                }
            }
            _ => {}
        }
        None
    }
}

impl QuizScreen {
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenAction> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let bar = ActionBarWidget::new(self.action_mode);
                match bar.hit_test(self.action_area, mouse.column, mouse.row)? {
                    ButtonHit::Submit => Some(ScreenAction::SubmitGuess),
                    ButtonHit::Next => Some(ScreenAction::NextRound),
                }
            }
            _ => None,
        }
    }
}
