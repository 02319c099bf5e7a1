use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("flashcard front cannot be empty")]
    EmptyFront,

    #[error("flashcard back cannot be empty")]
    EmptyBack,
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// A single generated flashcard: a prompt on the front, the answer on the back.
///
/// Cards are immutable once received from the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    front: String,
    back: String,
}

impl Flashcard {
    /// Creates a flashcard from generated text.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError` if either side is empty or whitespace-only.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Result<Self, FlashcardError> {
        let front = front.into();
        let back = back.into();
        if front.trim().is_empty() {
            return Err(FlashcardError::EmptyFront);
        }
        if back.trim().is_empty() {
            return Err(FlashcardError::EmptyBack);
        }

        Ok(Self {
            front: front.trim().to_owned(),
            back: back.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
