use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizQuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("a question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("option {0} is empty")]
    EmptyOption(usize),

    #[error("correct index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly one correct option.
///
/// Invariant: `correct_index < options.len()` and `options.len() >= 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
}

impl QuizQuestion {
    /// Creates a validated question.
    ///
    /// The explanation may be empty; generators do not always provide one.
    ///
    /// # Errors
    ///
    /// Returns `QuizQuestionError` if the question or an option is blank, there are
    /// fewer than two options, or `correct_index` does not name an option.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizQuestionError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizQuestionError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(QuizQuestionError::TooFewOptions(options.len()));
        }
        if let Some(idx) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuizQuestionError::EmptyOption(idx));
        }
        if correct_index >= options.len() {
            return Err(QuizQuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                options: options.len(),
            });
        }

        Ok(Self {
            question: question.trim().to_owned(),
            options,
            correct_index,
            explanation: explanation.into().trim().to_owned(),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
