use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;

/// How long the flag stays visible before the auto-hide fires
pub const REVEAL_WINDOW: Duration = Duration::from_millis(1000);

/// Where the current round is in its reveal/guess cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the flag art; nothing shown yet
    Loading,
    /// Flag visible during the reveal window
    Revealed,
    /// Reveal window elapsed; flag hidden, input still open
    Hidden,
    /// Guess submitted; flag re-shown for context, input locked
    Result,
}

/// Generation counter identifying one round. Deferred work (the
/// auto-hide, a late flag load) is tagged with the id of the round that
/// scheduled it, so a round that has since ended cannot be touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundId(u64);

/// What came of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect { answer: String },
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }

    /// The feedback line shown to the player
    pub fn feedback(&self) -> String {
        match self {
            GuessOutcome::Correct => "Correct!".to_string(),
            GuessOutcome::Incorrect { answer } => {
                format!("Sorry, the correct answer was {}.", answer)
            }
        }
    }
}

/// Owns the game state and drives round transitions. All mutation goes
/// through the methods here; the display layer only projects it.
///
/// Invariant: `current_code` is `Some` (and names a catalog entry)
/// whenever `in_progress` is true.
pub struct RoundController {
    catalog: Catalog,
    rng: StdRng,
    score: u32,
    current_code: Option<String>,
    in_progress: bool,
    phase: RoundPhase,
    round: RoundId,
}

impl RoundController {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_seed(catalog, rand::thread_rng().gen())
    }

    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
            score: 0,
            current_code: None,
            in_progress: false,
            phase: RoundPhase::Loading,
            round: RoundId(0),
        }
    }

    /// Reset the score and open the first round
    pub fn start_game(&mut self) -> Option<RoundId> {
        self.score = 0;
        self.start_new_round()
    }

    /// Pick the next country uniformly at random and open the round.
    /// Returns the id the display layer tags deferred work with, or
    /// `None` (and no round starts) when the catalog is empty.
    pub fn start_new_round(&mut self) -> Option<RoundId> {
        if self.catalog.is_empty() {
            return None;
        }
        let codes: Vec<&str> = self.catalog.codes().collect();
        let idx = self.rng.gen_range(0..codes.len());
        self.current_code = Some(codes[idx].to_string());

        self.round = RoundId(self.round.0 + 1);
        self.in_progress = true;
        self.phase = RoundPhase::Loading;
        Some(self.round)
    }

    /// The display surface resolved the flag for `round`. Reveals it and
    /// tells the caller to arm the auto-hide. A stale id, or a round
    /// already answered, does nothing.
    pub fn flag_loaded(&mut self, round: RoundId) -> bool {
        if round != self.round || !self.in_progress {
            return false;
        }
        self.phase = RoundPhase::Revealed;
        true
    }

    /// The reveal-window timer fired. Hides the flag only when `round`
    /// is still the current round and still unanswered; a guess that
    /// landed first wins the race and the stale timer is suppressed
    /// here rather than cancelled.
    pub fn auto_hide(&mut self, round: RoundId) -> bool {
        if round != self.round || !self.in_progress || self.phase != RoundPhase::Revealed {
            return false;
        }
        self.phase = RoundPhase::Hidden;
        true
    }

    /// Judge the typed answer against the current country. Returns
    /// `None` without touching anything when no round is open (double
    /// submission, stale Enter press). Either way the round ends: flag
    /// re-shown, input locked, and only a match moves the score.
    pub fn submit_guess(&mut self, raw: &str) -> Option<GuessOutcome> {
        if !self.in_progress {
            return None;
        }
        let code = self.current_code.as_deref()?;
        let answer = self.catalog.name_of(code)?;

        let outcome = if normalize(raw) == normalize(answer) {
            self.score += 1;
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect {
                answer: answer.to_string(),
            }
        };

        self.in_progress = false;
        self.phase = RoundPhase::Result;
        Some(outcome)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn current_code(&self) -> Option<&str> {
        self.current_code.as_deref()
    }

    pub fn current_round(&self) -> RoundId {
        self.round
    }

    /// Whether the flag container is shown right now
    pub fn flag_visible(&self) -> bool {
        matches!(self.phase, RoundPhase::Revealed | RoundPhase::Result)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Guess comparison ignores case and surrounding whitespace
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france_only() -> RoundController {
        RoundController::with_seed(Catalog::from_entries([("FR", "France")]), 7)
    }

    fn europe() -> RoundController {
        let catalog = Catalog::from_entries([
            ("DE", "Germany"),
            ("FR", "France"),
            ("IT", "Italy"),
            ("NL", "Netherlands"),
        ]);
        RoundController::with_seed(catalog, 42)
    }

    #[test]
    fn test_selected_code_is_in_catalog() {
        let mut game = europe();
        for _ in 0..50 {
            game.start_new_round().unwrap();
            let code = game.current_code().unwrap();
            assert!(game.catalog().contains(code));
        }
    }

    #[test]
    fn test_guess_matching_ignores_case_and_whitespace() {
        for raw in ["France", " france ", "FRANCE", "\tfrance\n"] {
            let mut game = france_only();
            game.start_game().unwrap();
            let outcome = game.submit_guess(raw).unwrap();
            assert!(outcome.is_correct(), "{raw:?} should match");
        }
    }

    #[test]
    fn test_correct_guess_scores_one_point() {
        let mut game = france_only();
        game.start_game().unwrap();
        game.submit_guess("france").unwrap();
        assert_eq!(game.score(), 1);

        game.start_new_round().unwrap();
        game.submit_guess("france").unwrap();
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn test_incorrect_guess_leaves_score_unchanged() {
        let mut game = france_only();
        game.start_game().unwrap();
        let outcome = game.submit_guess("germany").unwrap();
        assert!(!outcome.is_correct());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_start_game_resets_score() {
        let mut game = france_only();
        game.start_game().unwrap();
        game.submit_guess("france").unwrap();
        assert_eq!(game.score(), 1);

        game.start_game().unwrap();
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_second_guess_is_a_no_op() {
        let mut game = france_only();
        game.start_game().unwrap();
        game.submit_guess("germany").unwrap();

        let score = game.score();
        let phase = game.phase();
        assert!(game.submit_guess("france").is_none());
        assert_eq!(game.score(), score);
        assert_eq!(game.phase(), phase);
    }

    #[test]
    fn test_guess_without_a_round_is_a_no_op() {
        let mut game = france_only();
        assert!(game.submit_guess("france").is_none());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_reveal_then_auto_hide() {
        let mut game = france_only();
        let round = game.start_game().unwrap();
        assert_eq!(game.phase(), RoundPhase::Loading);
        assert!(!game.flag_visible());

        assert!(game.flag_loaded(round));
        assert_eq!(game.phase(), RoundPhase::Revealed);
        assert!(game.flag_visible());

        assert!(game.auto_hide(round));
        assert_eq!(game.phase(), RoundPhase::Hidden);
        assert!(!game.flag_visible());
    }

    #[test]
    fn test_early_guess_beats_the_hide_timer() {
        let mut game = france_only();
        let round = game.start_game().unwrap();
        game.flag_loaded(round);

        // Guess lands inside the reveal window...
        game.submit_guess("france").unwrap();
        assert_eq!(game.phase(), RoundPhase::Result);

        // ...so the timer firing afterwards must not touch anything.
        assert!(!game.auto_hide(round));
        assert_eq!(game.phase(), RoundPhase::Result);
        assert!(game.flag_visible());
    }

    #[test]
    fn test_stale_timer_never_leaks_into_the_next_round() {
        let mut game = france_only();
        let round_a = game.start_game().unwrap();
        game.flag_loaded(round_a);
        game.submit_guess("france").unwrap();

        let round_b = game.start_new_round().unwrap();
        game.flag_loaded(round_b);
        assert_eq!(game.phase(), RoundPhase::Revealed);

        // Round A's timer fires late: round B keeps its reveal.
        assert!(!game.auto_hide(round_a));
        assert_eq!(game.phase(), RoundPhase::Revealed);
    }

    #[test]
    fn test_stale_flag_load_is_ignored() {
        let mut game = france_only();
        let round_a = game.start_game().unwrap();
        game.submit_guess("france").unwrap();

        assert!(!game.flag_loaded(round_a));
        assert_eq!(game.phase(), RoundPhase::Result);
    }

    #[test]
    fn test_empty_catalog_starts_nothing() {
        let mut game = RoundController::with_seed(Catalog::default(), 1);
        assert!(game.start_new_round().is_none());
        assert!(!game.in_progress());
        assert!(game.current_code().is_none());
    }

    #[test]
    fn test_round_end_to_end_correct() {
        let mut game = france_only();
        let round = game.start_game().unwrap();
        assert_eq!(game.current_code(), Some("FR"));

        game.flag_loaded(round);
        let outcome = game.submit_guess("france").unwrap();
        assert_eq!(outcome.feedback(), "Correct!");
        assert_eq!(game.score(), 1);
        assert!(!game.in_progress());
        assert_eq!(game.phase(), RoundPhase::Result);
    }

    #[test]
    fn test_round_end_to_end_incorrect() {
        let mut game = france_only();
        let round = game.start_game().unwrap();
        game.flag_loaded(round);

        let outcome = game.submit_guess("germany").unwrap();
        assert_eq!(outcome.feedback(), "Sorry, the correct answer was France.");
        assert_eq!(game.score(), 0);
        assert!(!game.in_progress());
    }

    #[test]
    fn test_round_ids_are_distinct_per_round() {
        let mut game = europe();
        let a = game.start_game().unwrap();
        game.submit_guess("x").unwrap();
        let b = game.start_new_round().unwrap();
        assert_ne!(a, b);
    }
}
