use flagquest_core::round::GuessOutcome;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Visual class of a feedback line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
    Error,
}

/// A feedback message and how to style it
#[derive(Debug, Clone)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn from_outcome(outcome: &GuessOutcome) -> Self {
        let kind = if outcome.is_correct() {
            FeedbackKind::Correct
        } else {
            FeedbackKind::Incorrect
        };
        Self {
            text: outcome.feedback(),
            kind,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }
}

/// One centered line; blank when there is nothing to say
pub struct FeedbackWidget<'a> {
    feedback: Option<&'a Feedback>,
}

impl<'a> FeedbackWidget<'a> {
    pub fn new(feedback: Option<&'a Feedback>) -> Self {
        Self { feedback }
    }
}

impl Widget for FeedbackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(feedback) = self.feedback else {
            return;
        };

        let color = match feedback.kind {
            FeedbackKind::Correct => Theme::CORRECT,
            FeedbackKind::Incorrect => Theme::INCORRECT,
            FeedbackKind::Error => Theme::ERROR,
        };

        let line = Line::from(Span::styled(
            feedback.text.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
