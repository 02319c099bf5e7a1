use thiserror::Error;

use crate::model::QuizQuestion;

use super::SessionError;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejected quiz transitions. None of these change the session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz is in progress")]
    NotInProgress,

    #[error("the current question has already been answered")]
    AlreadyAnswered,

    #[error("option {index} does not exist ({options} options)")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("feedback ticket no longer matches the session")]
    StaleFeedback,
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// `round(100 * score / total)`, rounding halves up. Returns 0 for an empty quiz.
#[must_use]
pub fn score_percent(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (200 * score + total) / (2 * total);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// Final tally once the last feedback window has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    #[must_use]
    pub fn percent(&self) -> u32 {
        score_percent(self.score, self.total)
    }
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Issued by [`QuizSession::answer`] and redeemed by [`QuizSession::finish_feedback`]
/// once the feedback window elapses.
///
/// A ticket goes stale as soon as the session is answered again, reloaded, or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FeedbackTicket {
    epoch: u64,
    correct: bool,
}

impl FeedbackTicket {
    #[must_use]
    pub fn was_correct(&self) -> bool {
        self.correct
    }
}

/// What happened when a feedback window closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Advanced { cursor: usize },
    Completed(QuizResult),
}

//
// ─── RUN ───────────────────────────────────────────────────────────────────────
//

/// A quiz being answered.
///
/// Invariant: `questions` is non-empty and `cursor < questions.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRun {
    questions: Vec<QuizQuestion>,
    cursor: usize,
    selected: Option<usize>,
    score: usize,
}

impl QuizRun {
    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.cursor]
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Empty,
    InProgress(QuizRun),
    Complete(QuizResult),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz runner: one answer per question, then a timed feedback window before
/// moving forward. There is no way back to an earlier question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    state: QuizState,
    epoch: u64,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Start a fresh run over `questions`, replacing any run or result.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for an empty question list; the session is left
    /// untouched.
    pub fn load(&mut self, questions: Vec<QuizQuestion>) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        self.epoch += 1;
        self.state = QuizState::InProgress(QuizRun {
            questions,
            cursor: 0,
            selected: None,
            score: 0,
        });
        Ok(())
    }

    /// Select an option for the current question.
    ///
    /// # Errors
    ///
    /// - `QuizError::NotInProgress` when no run is active.
    /// - `QuizError::AlreadyAnswered` while the previous answer's feedback is showing.
    /// - `QuizError::OptionOutOfRange` when `index` does not name an option.
    pub fn answer(&mut self, index: usize) -> Result<FeedbackTicket, QuizError> {
        let QuizState::InProgress(run) = &mut self.state else {
            return Err(QuizError::NotInProgress);
        };
        if run.selected.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        let options = run.current().options().len();
        if index >= options {
            return Err(QuizError::OptionOutOfRange { index, options });
        }

        let correct = run.current().is_correct(index);
        run.selected = Some(index);
        if correct {
            run.score += 1;
        }
        self.epoch += 1;

        Ok(FeedbackTicket {
            epoch: self.epoch,
            correct,
        })
    }

    /// Close the feedback window opened by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::StaleFeedback` if the session changed since the ticket was
    /// issued (including an earlier redemption of the same ticket).
    pub fn finish_feedback(&mut self, ticket: FeedbackTicket) -> Result<QuizStep, QuizError> {
        if ticket.epoch != self.epoch {
            return Err(QuizError::StaleFeedback);
        }
        let QuizState::InProgress(run) = &mut self.state else {
            return Err(QuizError::StaleFeedback);
        };
        if run.selected.is_none() {
            return Err(QuizError::StaleFeedback);
        }

        self.epoch += 1;
        if run.is_last() {
            let result = QuizResult {
                score: run.score,
                total: run.questions.len(),
            };
            self.state = QuizState::Complete(result);
            return Ok(QuizStep::Completed(result));
        }

        run.cursor += 1;
        run.selected = None;
        Ok(QuizStep::Advanced { cursor: run.cursor })
    }

    /// Drop the run or result and invalidate any outstanding ticket.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = QuizState::Empty;
    }

    #[must_use]
    pub fn run(&self) -> Option<&QuizRun> {
        match &self.state {
            QuizState::InProgress(run) => Some(run),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        match self.state {
            QuizState::Complete(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, QuizState::Empty)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Complete(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.state {
            QuizState::Empty => 0,
            QuizState::InProgress(run) => run.questions.len(),
            QuizState::Complete(result) => result.total,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        match &self.state {
            QuizState::Empty => 0,
            QuizState::InProgress(run) => run.score,
            QuizState::Complete(result) => result.score,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.run().and_then(QuizRun::selected)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.run().map(QuizRun::current)
    }

    /// 1-based question number, or `len` once complete.
    #[must_use]
    pub fn question_number(&self) -> usize {
        match &self.state {
            QuizState::Empty => 0,
            QuizState::InProgress(run) => run.cursor + 1,
            QuizState::Complete(result) => result.total,
        }
    }

    /// `(cursor + 1) / len`; `1.0` once complete and `0.0` with nothing loaded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.len();
        if total == 0 {
            return 0.0;
        }
        self.question_number() as f64 / total as f64
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
