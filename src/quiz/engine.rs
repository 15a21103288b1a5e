//! Quiz session state machine.
//!
//! Each question moves `Active -> Locked -> (Active | Complete)`. A question
//! locks exactly once, either through [`QuizEngine::select_choice`] or through
//! the countdown running out; whichever arrives second is dropped. The
//! `feedback_visible` flag is the only guard for that race.
//!
//! Delayed work (the auto-advance after feedback) is keyed by a [`LockToken`].
//! A token from a restarted session, or for a question that has already been
//! left, is ignored by [`QuizEngine::advance_if_current`].

use crate::quiz::error::QuizError;
use crate::quiz::question::Question;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{debug, info};

/// Seconds the player has to answer each question.
pub const DEFAULT_TIME_BUDGET_SECS: u32 = 15;

/// How long feedback stays on screen before the automatic advance.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1200);

/// How a locked question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    TimedOut,
}

/// Identifies one lock of one question in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockToken {
    session: u64,
    index: usize,
}

impl LockToken {
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counting down, no answer yet.
    Active,
    /// Answered or timed out; feedback is showing.
    Locked,
    /// Past the last question.
    Complete,
}

/// Result of a successful lock transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lock {
    pub token: LockToken,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Ignored,
    Counting(u32),
    Locked(Lock),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Ignored,
    Next(usize),
    Completed { score: u32, total: usize },
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    time_budget: u32,
    current_index: usize,
    selected_choice: Option<usize>,
    feedback_visible: bool,
    score: u32,
    time_remaining: u32,
    complete: bool,
    hint_revealed: bool,
    history: Vec<Outcome>,
    session: u64,
}

impl QuizEngine {
    /// Start a session with the default 15 second budget.
    pub fn start(questions: Vec<Question>) -> Result<Self, QuizError> {
        Self::with_time_budget(questions, DEFAULT_TIME_BUDGET_SECS)
    }

    /// Start a session with a custom per-question budget. A zero budget is
    /// raised to one second so every question gets at least one tick.
    pub fn with_time_budget(questions: Vec<Question>, secs: u32) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionBank);
        }
        for q in &questions {
            q.validate()?;
        }

        let time_budget = secs.max(1);
        info!(questions = questions.len(), time_budget, "quiz session started");
        Ok(Self {
            history: Vec::with_capacity(questions.len()),
            questions,
            time_budget,
            current_index: 0,
            selected_choice: None,
            feedback_visible: false,
            score: 0,
            time_remaining: time_budget,
            complete: false,
            hint_revealed: false,
            session: 0,
        })
    }

    /// One second elapsed. Runs out the clock into a timeout at zero.
    pub fn tick(&mut self) -> TickResult {
        if self.feedback_visible || self.complete {
            return TickResult::Ignored;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            return match self.timeout() {
                Some(lock) => TickResult::Locked(lock),
                None => TickResult::Ignored,
            };
        }
        TickResult::Counting(self.time_remaining)
    }

    /// Lock the current question with the player's answer.
    ///
    /// Returns `None` when the question is already locked, the session is
    /// complete, or `index` is not one of the current choices.
    pub fn select_choice(&mut self, index: usize) -> Option<Lock> {
        if self.feedback_visible || self.complete {
            debug!(index, "selection ignored, question already locked");
            return None;
        }
        if index >= self.current_question().choices.len() {
            debug!(index, "selection ignored, no such choice");
            return None;
        }
        Some(self.lock(Some(index)))
    }

    /// Lock the current question without an answer.
    pub fn timeout(&mut self) -> Option<Lock> {
        if self.feedback_visible || self.complete {
            return None;
        }
        Some(self.lock(None))
    }

    /// Leave a locked question: move to the next one or finish the session.
    pub fn advance(&mut self) -> Advance {
        if !self.feedback_visible || self.complete {
            return Advance::Ignored;
        }

        if self.is_last() {
            self.complete = true;
            info!(score = self.score, total = self.questions.len(), "quiz complete");
            return Advance::Completed {
                score: self.score,
                total: self.questions.len(),
            };
        }

        self.current_index += 1;
        self.selected_choice = None;
        self.feedback_visible = false;
        self.hint_revealed = false;
        self.time_remaining = self.time_budget;
        debug!(index = self.current_index, "advanced to next question");
        Advance::Next(self.current_index)
    }

    /// Advance only if `token` still names the live session and question.
    pub fn advance_if_current(&mut self, token: LockToken) -> Advance {
        if token.session != self.session || token.index != self.current_index {
            debug!(
                token_session = token.session,
                token_index = token.index,
                session = self.session,
                index = self.current_index,
                "dropping stale advance"
            );
            return Advance::Ignored;
        }
        self.advance()
    }

    /// Begin a fresh session over the same questions in the same order.
    /// Any outstanding [`LockToken`] becomes stale.
    pub fn restart(&mut self) {
        self.session = self.session.wrapping_add(1);
        self.current_index = 0;
        self.selected_choice = None;
        self.feedback_visible = false;
        self.score = 0;
        self.time_remaining = self.time_budget;
        self.complete = false;
        self.hint_revealed = false;
        self.history.clear();
        info!(session = self.session, "quiz restarted");
    }

    /// Restart with the questions reordered by `rng`.
    pub fn restart_shuffled<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
        self.restart();
    }

    /// Show the current question's hint. Only possible while the question is
    /// still open and actually has a hint.
    pub fn reveal_hint(&mut self) -> bool {
        if self.phase() != Phase::Active || self.current_question().hint.is_none() {
            return false;
        }
        self.hint_revealed = true;
        true
    }

    fn lock(&mut self, selected: Option<usize>) -> Lock {
        let outcome = match selected {
            Some(choice) if self.current_question().is_correct(choice) => Outcome::Correct,
            Some(_) => Outcome::Incorrect,
            None => Outcome::TimedOut,
        };
        if outcome == Outcome::Correct {
            self.score += 1;
        }
        self.selected_choice = selected;
        self.feedback_visible = true;
        self.history.push(outcome);
        debug!(index = self.current_index, ?outcome, score = self.score, "question locked");
        Lock {
            token: self.token(),
            outcome,
        }
    }

    fn token(&self) -> LockToken {
        LockToken {
            session: self.session,
            index: self.current_index,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn selected_choice(&self) -> Option<usize> {
        self.selected_choice
    }

    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn time_budget(&self) -> u32 {
        self.time_budget
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    /// Outcomes of every question locked so far this session, in play order.
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    /// Outcome of the current question once it is locked.
    pub fn current_outcome(&self) -> Option<Outcome> {
        if self.feedback_visible {
            self.history.last().copied()
        } else {
            None
        }
    }

    pub fn phase(&self) -> Phase {
        if self.complete {
            Phase::Complete
        } else if self.feedback_visible {
            Phase::Locked
        } else {
            Phase::Active
        }
    }

    /// Fraction of the quiz reached, counting the current question.
    pub fn progress(&self) -> f64 {
        (self.current_index + 1) as f64 / self.questions.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: u32, correct: usize) -> Question {
        Question {
            id,
            prompt: format!("Question {}", id),
            choices: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_choice: correct,
            explanation: "Because.".into(),
            source_label: "Source".into(),
            source_url: "https://example.org".into(),
            hint: None,
        }
    }

    fn bank(n: u32) -> Vec<Question> {
        (1..=n).map(|id| question(id, (id as usize) % 4)).collect()
    }

    fn three() -> QuizEngine {
        QuizEngine::start(vec![question(1, 1), question(2, 0), question(3, 1)]).unwrap()
    }

    #[test]
    fn test_start_initial_state() {
        let engine = three();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.selected_choice(), None);
        assert!(!engine.feedback_visible());
        assert_eq!(engine.time_remaining(), DEFAULT_TIME_BUDGET_SECS);
        assert!(!engine.is_complete());
        assert_eq!(engine.phase(), Phase::Active);
    }

    #[test]
    fn test_start_rejects_empty_bank() {
        assert_eq!(
            QuizEngine::start(Vec::new()).unwrap_err(),
            QuizError::EmptyQuestionBank
        );
    }

    #[test]
    fn test_start_rejects_invalid_question() {
        let err = QuizEngine::start(vec![question(1, 0), question(2, 9)]).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion { id: 2, .. }));
    }

    #[test]
    fn test_zero_budget_is_raised_to_one() {
        let mut engine = QuizEngine::with_time_budget(bank(1), 0).unwrap();
        assert_eq!(engine.time_budget(), 1);
        assert!(matches!(engine.tick(), TickResult::Locked(_)));
    }

    #[test]
    fn test_correct_selection_scores_and_locks() {
        let mut engine = three();
        let lock = engine.select_choice(1).unwrap();
        assert_eq!(lock.outcome, Outcome::Correct);
        assert_eq!(lock.token.index(), 0);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.selected_choice(), Some(1));
        assert!(engine.feedback_visible());
        assert_eq!(engine.phase(), Phase::Locked);
        assert_eq!(engine.current_outcome(), Some(Outcome::Correct));
    }

    #[test]
    fn test_second_selection_is_noop() {
        let mut engine = three();
        engine.select_choice(0).unwrap();
        assert!(engine.select_choice(1).is_none());
        assert_eq!(engine.selected_choice(), Some(0));
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let mut engine = three();
        assert!(engine.select_choice(4).is_none());
        assert!(!engine.feedback_visible());
        assert_eq!(engine.selected_choice(), None);
    }

    #[test]
    fn test_timeout_after_selection_is_noop() {
        let mut engine = three();
        engine.select_choice(1).unwrap();
        assert!(engine.timeout().is_none());
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.selected_choice(), Some(1));
        assert_eq!(engine.history(), &[Outcome::Correct]);
    }

    #[test]
    fn test_tick_counts_down_and_stops_when_locked() {
        let mut engine = three();
        assert_eq!(engine.tick(), TickResult::Counting(14));
        assert_eq!(engine.tick(), TickResult::Counting(13));
        engine.select_choice(2).unwrap();
        assert_eq!(engine.tick(), TickResult::Ignored);
        assert_eq!(engine.time_remaining(), 13);
    }

    #[test]
    fn test_tick_at_one_second_times_out() {
        let mut engine = QuizEngine::with_time_budget(bank(2), 2).unwrap();
        engine.tick();
        assert_eq!(engine.time_remaining(), 1);

        let lock = match engine.tick() {
            TickResult::Locked(lock) => lock,
            other => panic!("expected lock, got {:?}", other),
        };
        assert_eq!(lock.outcome, Outcome::TimedOut);
        assert_eq!(engine.selected_choice(), None);
        assert!(engine.feedback_visible());
        assert_eq!(engine.score(), 0);

        let mut explicit = QuizEngine::with_time_budget(bank(2), 2).unwrap();
        explicit.tick();
        explicit.timeout().unwrap();
        assert_eq!(explicit.selected_choice(), engine.selected_choice());
        assert_eq!(explicit.feedback_visible(), engine.feedback_visible());
        assert_eq!(explicit.score(), engine.score());
        assert_eq!(explicit.history(), engine.history());
    }

    #[test]
    fn test_select_and_timeout_race_locks_once() {
        // Selection first, then the expiring tick.
        let mut engine = QuizEngine::with_time_budget(bank(3), 1).unwrap();
        assert!(engine.select_choice(2).is_some());
        assert_eq!(engine.tick(), TickResult::Ignored);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.score(), 0);

        // Expiring tick first, then a late selection.
        let mut engine = QuizEngine::with_time_budget(bank(3), 1).unwrap();
        assert!(matches!(engine.tick(), TickResult::Locked(_)));
        assert!(engine.select_choice(2).is_none());
        assert_eq!(engine.history(), &[Outcome::TimedOut]);
        assert_eq!(engine.selected_choice(), None);
    }

    #[test]
    fn test_advance_requires_lock() {
        let mut engine = three();
        assert_eq!(engine.advance(), Advance::Ignored);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn test_advance_resets_question_state() {
        let mut engine = three();
        engine.tick();
        engine.tick();
        engine.select_choice(3).unwrap();
        assert_eq!(engine.advance(), Advance::Next(1));
        assert_eq!(engine.current_index(), 1);
        assert_eq!(engine.selected_choice(), None);
        assert!(!engine.feedback_visible());
        assert_eq!(engine.time_remaining(), DEFAULT_TIME_BUDGET_SECS);
        assert_eq!(engine.current_outcome(), None);
    }

    #[test]
    fn test_mixed_three_question_scenario() {
        let mut engine = three();

        engine.select_choice(1).unwrap();
        assert_eq!(engine.score(), 1);
        engine.advance();

        for _ in 0..DEFAULT_TIME_BUDGET_SECS {
            engine.tick();
        }
        assert_eq!(engine.selected_choice(), None);
        assert!(engine.feedback_visible());
        assert_eq!(engine.score(), 1);
        engine.advance();

        engine.select_choice(3).unwrap();
        assert_eq!(engine.score(), 1);
        assert_eq!(
            engine.advance(),
            Advance::Completed { score: 1, total: 3 }
        );

        assert!(engine.is_complete());
        assert_eq!(engine.score(), 1);
        assert_eq!(
            engine.history(),
            &[Outcome::Correct, Outcome::TimedOut, Outcome::Incorrect]
        );
    }

    #[test]
    fn test_all_correct_yields_full_score() {
        let questions = bank(6);
        let answers: Vec<usize> = questions.iter().map(|q| q.correct_choice).collect();
        let mut engine = QuizEngine::start(questions).unwrap();
        for answer in answers {
            engine.select_choice(answer).unwrap();
            engine.advance();
        }
        assert!(engine.is_complete());
        assert_eq!(engine.score(), 6);
    }

    #[test]
    fn test_complete_is_terminal_until_restart() {
        let mut engine = QuizEngine::start(bank(1)).unwrap();
        engine.select_choice(1).unwrap();
        engine.advance();
        assert!(engine.is_complete());

        assert!(engine.select_choice(0).is_none());
        assert!(engine.timeout().is_none());
        assert_eq!(engine.tick(), TickResult::Ignored);
        assert_eq!(engine.advance(), Advance::Ignored);
        assert!(engine.is_complete());
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.selected_choice(), Some(1));
        assert_eq!(engine.phase(), Phase::Complete);
    }

    #[test]
    fn test_restart_resets_from_any_state() {
        let mut engine = three();
        engine.select_choice(1).unwrap();
        engine.advance();
        engine.tick();
        engine.restart();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.current_index(), 0);
        assert!(!engine.is_complete());
        assert!(!engine.feedback_visible());
        assert_eq!(engine.time_remaining(), DEFAULT_TIME_BUDGET_SECS);
        assert!(engine.history().is_empty());

        for _ in 0..3 {
            engine.timeout();
            engine.advance();
        }
        assert!(engine.is_complete());
        engine.restart();
        assert!(!engine.is_complete());
        assert_eq!(engine.questions()[0].id, 1);
    }

    #[test]
    fn test_stale_token_after_restart_is_ignored() {
        let mut engine = three();
        let lock = engine.select_choice(1).unwrap();
        engine.restart();
        engine.select_choice(0).unwrap();

        assert_eq!(engine.advance_if_current(lock.token), Advance::Ignored);
        assert_eq!(engine.current_index(), 0);
        assert!(engine.feedback_visible());
    }

    #[test]
    fn test_token_after_manual_advance_is_ignored() {
        let mut engine = three();
        let first = engine.select_choice(1).unwrap();
        engine.advance();
        engine.select_choice(0).unwrap();

        assert_eq!(engine.advance_if_current(first.token), Advance::Ignored);
        assert_eq!(engine.current_index(), 1);

        let mut engine = QuizEngine::start(bank(1)).unwrap();
        let lock = engine.select_choice(0).unwrap();
        engine.advance();
        assert_eq!(engine.advance_if_current(lock.token), Advance::Ignored);
    }

    #[test]
    fn test_current_token_advances_once() {
        let mut engine = three();
        let lock = engine.select_choice(1).unwrap();
        assert_eq!(engine.advance_if_current(lock.token), Advance::Next(1));
        assert_eq!(engine.advance_if_current(lock.token), Advance::Ignored);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let questions = bank(5);
        let total = questions.len() as u32;
        let mut engine = QuizEngine::with_time_budget(questions, 3).unwrap();
        let script = [0usize, 1, 2, 3, 0, 1, 2, 3, 0, 1];
        for (step, choice) in script.iter().enumerate() {
            if step % 3 == 0 {
                engine.tick();
            } else {
                engine.select_choice(*choice);
            }
            engine.advance();
            let locked_bonus = u32::from(engine.current_outcome() == Some(Outcome::Correct));
            assert!(engine.score() <= total);
            assert!(engine.score() <= engine.current_index() as u32 + locked_bonus);
        }
    }

    #[test]
    fn test_hint_only_while_active() {
        let mut questions = bank(2);
        questions[0].hint = Some("Think of fish.".into());
        let mut engine = QuizEngine::start(questions).unwrap();

        assert!(engine.reveal_hint());
        assert!(engine.hint_revealed());
        engine.timeout();
        engine.advance();
        assert!(!engine.hint_revealed());
        // Second question carries no hint.
        assert!(!engine.reveal_hint());
    }

    #[test]
    fn test_restart_shuffled_keeps_question_set() {
        let mut engine = QuizEngine::start(bank(8)).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        engine.restart_shuffled(&mut rng);

        let mut ids: Vec<u32> = engine.questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_progress_counts_current_question() {
        let mut engine = QuizEngine::start(bank(4)).unwrap();
        assert!((engine.progress() - 0.25).abs() < f64::EPSILON);
        engine.timeout();
        engine.advance();
        assert!((engine.progress() - 0.5).abs() < f64::EPSILON);
    }
}
