//! In-memory state machines for the three study features.
//!
//! Each session owns its state exclusively; none of them know which view is
//! currently visible.

mod chat;
mod flashcards;
mod quiz;

use thiserror::Error;

pub use chat::{ANSWER_ERROR_MESSAGE, ChatSession, PendingAnswer};
pub use flashcards::{ActiveDeck, CardPosition, FlashcardSession};
pub use quiz::{
    FeedbackTicket, QuizError, QuizResult, QuizRun, QuizSession, QuizState, QuizStep,
    score_percent,
};

/// Errors shared by the loadable sessions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot load an empty set of items")]
    Empty,
}
