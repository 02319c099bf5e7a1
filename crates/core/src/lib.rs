#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use model::{ChatTurn, Flashcard, QuizQuestion, Speaker};
pub use session::{ChatSession, FlashcardSession, QuizSession};
