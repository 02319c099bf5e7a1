mod chat;
mod flashcard;
mod quiz;

pub use chat::{ChatTurn, Speaker};
pub use flashcard::{Flashcard, FlashcardError};
pub use quiz::{QuizQuestion, QuizQuestionError};
