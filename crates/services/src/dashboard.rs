use tracing::{debug, warn};

use study_core::model::{Flashcard, QuizQuestion};
use study_core::session::{
    ChatSession, FeedbackTicket, FlashcardSession, PendingAnswer, QuizError, QuizSession,
    QuizStep,
};

use crate::chat::record_answer;
use crate::content_client::ContentClient;
use crate::error::{GenerationError, SubmitError};

pub const FLASHCARDS_ERROR_NOTICE: &str = "Error generating flashcards.";
pub const QUIZ_ERROR_NOTICE: &str = "Error generating quiz.";

//
// ─── VIEW ROUTING ──────────────────────────────────────────────────────────────
//

/// Which feature is on screen. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Flashcards,
    Quiz,
    StudyBuddy,
}

impl ActiveView {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Flashcards, Self::Quiz, Self::StudyBuddy];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Flashcards => "Flashcards",
            Self::Quiz => "Quiz",
            Self::StudyBuddy => "Study Buddy",
        }
    }
}

/// The request currently holding the busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyAction {
    Flashcards,
    Quiz,
    Chat,
}

/// Whether a generation attempt ended with new content loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Loaded,
    Failed,
}

/// A study buddy question that has been recorded but not answered.
#[derive(Debug)]
pub struct ChatRequest {
    pub question: String,
    pub pending: PendingAnswer,
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// How far the learner is through a loaded deck or quiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureProgress {
    pub position: usize,
    pub total: usize,
    pub fraction: f64,
}

/// Data for the dashboard's feature cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSummary {
    pub flashcards: Option<FeatureProgress>,
    pub quiz: Option<FeatureProgress>,
    pub questions_asked: usize,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Composes the three sessions with view routing and request bookkeeping.
///
/// Submissions are two-phase so the UI can release its borrow across the network
/// call: `begin_*` validates and marks the controller busy, `finish_*` consumes the
/// result. The `submit_*` helpers run both phases against a client.
#[derive(Debug, Clone, Default)]
pub struct DashboardController {
    active: ActiveView,
    busy: Option<BusyAction>,
    notice: Option<String>,
    flashcards: FlashcardSession,
    quiz: QuizSession,
    chat: ChatSession,
    notes_input: String,
    quiz_input: String,
    chat_input: String,
}

impl DashboardController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Routing

    #[must_use]
    pub fn active_view(&self) -> ActiveView {
        self.active
    }

    /// Switch views. Session state is left exactly as it was.
    pub fn show(&mut self, view: ActiveView) {
        if self.active != view {
            debug!(from = ?self.active, to = ?view, "switching view");
        }
        self.active = view;
    }

    // Request bookkeeping

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    #[must_use]
    pub fn busy_action(&self) -> Option<BusyAction> {
        self.busy
    }

    /// Blocking message from the last failed generation, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // Inputs

    #[must_use]
    pub fn notes_input(&self) -> &str {
        &self.notes_input
    }

    pub fn set_notes_input(&mut self, value: impl Into<String>) {
        self.notes_input = value.into();
    }

    #[must_use]
    pub fn quiz_input(&self) -> &str {
        &self.quiz_input
    }

    pub fn set_quiz_input(&mut self, value: impl Into<String>) {
        self.quiz_input = value.into();
    }

    #[must_use]
    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    pub fn set_chat_input(&mut self, value: impl Into<String>) {
        self.chat_input = value.into();
    }

    /// Whether the submit control for `action` should be enabled.
    #[must_use]
    pub fn can_submit(&self, action: BusyAction) -> bool {
        let input = match action {
            BusyAction::Flashcards => &self.notes_input,
            BusyAction::Quiz => &self.quiz_input,
            BusyAction::Chat => &self.chat_input,
        };
        !self.is_busy() && !input.trim().is_empty()
    }

    fn acquire(&mut self, action: BusyAction) -> Result<(), SubmitError> {
        if self.busy.is_some() {
            return Err(SubmitError::Busy);
        }
        if !self.can_submit(action) {
            return Err(SubmitError::EmptyInput);
        }
        self.busy = Some(action);
        Ok(())
    }

    // Sessions

    #[must_use]
    pub fn flashcards(&self) -> &FlashcardSession {
        &self.flashcards
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    #[must_use]
    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    // Flashcards

    /// Start a flashcard request. Returns the notes to send.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when busy or when the notes are blank.
    pub fn begin_flashcards(&mut self) -> Result<String, SubmitError> {
        self.acquire(BusyAction::Flashcards)?;
        Ok(self.notes_input.clone())
    }

    /// Apply the result of a flashcard request.
    ///
    /// On success the deck replaces any previous one and the flashcard view opens.
    /// On failure the current view and deck are untouched and a notice is raised.
    /// The notes input is cleared either way.
    pub fn finish_flashcards(
        &mut self,
        result: Result<Vec<Flashcard>, GenerationError>,
    ) -> SubmitOutcome {
        self.busy = None;
        self.notes_input.clear();

        let loaded = match result {
            Ok(deck) => {
                let cards = deck.len();
                self.flashcards.load(deck).map(|()| cards).map_err(|err| err.to_string())
            }
            Err(err) => Err(err.to_string()),
        };
        match loaded {
            Ok(cards) => {
                debug!(cards, "flashcard deck loaded");
                self.show(ActiveView::Flashcards);
                SubmitOutcome::Loaded
            }
            Err(error) => {
                warn!(%error, "flashcard generation failed");
                self.notice = Some(FLASHCARDS_ERROR_NOTICE.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Run a complete flashcard request against `client`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the request could not be started.
    pub async fn submit_flashcards(
        &mut self,
        client: &dyn ContentClient,
    ) -> Result<SubmitOutcome, SubmitError> {
        let notes = self.begin_flashcards()?;
        let result = client.generate_flashcards(&notes).await;
        Ok(self.finish_flashcards(result))
    }

    pub fn flip_card(&mut self) {
        self.flashcards.flip();
    }

    pub fn next_card(&mut self) -> bool {
        self.flashcards.next()
    }

    pub fn previous_card(&mut self) -> bool {
        self.flashcards.previous()
    }

    /// Discard the deck and go back to the dashboard.
    pub fn close_flashcards(&mut self) {
        self.flashcards.reset();
        self.show(ActiveView::Dashboard);
    }

    // Quiz

    /// Start a quiz request. Returns the source text to send.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when busy or when the text is blank.
    pub fn begin_quiz(&mut self) -> Result<String, SubmitError> {
        self.acquire(BusyAction::Quiz)?;
        Ok(self.quiz_input.clone())
    }

    /// Apply the result of a quiz request. Mirrors [`Self::finish_flashcards`].
    pub fn finish_quiz(
        &mut self,
        result: Result<Vec<QuizQuestion>, GenerationError>,
    ) -> SubmitOutcome {
        self.busy = None;
        self.quiz_input.clear();

        let loaded = match result {
            Ok(questions) => {
                let count = questions.len();
                self.quiz.load(questions).map(|()| count).map_err(|err| err.to_string())
            }
            Err(err) => Err(err.to_string()),
        };
        match loaded {
            Ok(questions) => {
                debug!(questions, "quiz loaded");
                self.show(ActiveView::Quiz);
                SubmitOutcome::Loaded
            }
            Err(error) => {
                warn!(%error, "quiz generation failed");
                self.notice = Some(QUIZ_ERROR_NOTICE.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Run a complete quiz request against `client`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the request could not be started.
    pub async fn submit_quiz(
        &mut self,
        client: &dyn ContentClient,
    ) -> Result<SubmitOutcome, SubmitError> {
        let text = self.begin_quiz()?;
        let result = client.generate_quiz(&text).await;
        Ok(self.finish_quiz(result))
    }

    /// Answer the current question; redeem the ticket when the feedback window ends.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError` from the session; nothing changes on error.
    pub fn answer_quiz(&mut self, index: usize) -> Result<FeedbackTicket, QuizError> {
        self.quiz.answer(index)
    }

    /// Close the feedback window opened by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::StaleFeedback` if the quiz changed in the meantime.
    pub fn finish_quiz_feedback(&mut self, ticket: FeedbackTicket) -> Result<QuizStep, QuizError> {
        let step = self.quiz.finish_feedback(ticket)?;
        if let QuizStep::Completed(result) = step {
            debug!(score = result.score, total = result.total, "quiz complete");
        }
        Ok(step)
    }

    /// Discard the quiz and go back to the dashboard.
    pub fn close_quiz(&mut self) {
        self.quiz.reset();
        self.show(ActiveView::Dashboard);
    }

    // Study buddy

    /// Record the typed question in the transcript and mark the controller busy.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when busy or when the question is blank.
    pub fn begin_chat(&mut self) -> Result<ChatRequest, SubmitError> {
        self.acquire(BusyAction::Chat)?;
        let question = self.chat_input.clone();
        let pending = self.chat.begin(question.clone());
        Ok(ChatRequest { question, pending })
    }

    /// Record the answer (or the fixed error message) and clear the input.
    pub fn finish_chat(
        &mut self,
        request: ChatRequest,
        answer: Result<String, GenerationError>,
    ) {
        self.busy = None;
        self.chat_input.clear();
        record_answer(&mut self.chat, request.pending, answer);
    }

    /// Ask the typed question against `client`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the question could not be sent. Generation failures
    /// end up in the transcript instead.
    pub async fn ask(&mut self, client: &dyn ContentClient) -> Result<(), SubmitError> {
        let request = self.begin_chat()?;
        let answer = client.ask_question(&request.question).await;
        self.finish_chat(request, answer);
        Ok(())
    }

    // Dashboard

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        let flashcards = self.flashcards.position().map(|pos| FeatureProgress {
            position: pos.number,
            total: pos.total,
            fraction: self.flashcards.progress(),
        });
        let quiz = (!self.quiz.is_empty()).then(|| FeatureProgress {
            position: self.quiz.question_number(),
            total: self.quiz.len(),
            fraction: self.quiz.progress(),
        });
        DashboardSummary {
            flashcards,
            quiz,
            questions_asked: self.chat.questions_asked(),
        }
    }
}
