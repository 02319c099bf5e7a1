use crate::model::{ChatTurn, Speaker};

/// Shown in place of an answer when the study buddy request fails.
pub const ANSWER_ERROR_MESSAGE: &str = "Error answering your question.";

/// Marks a question whose answer has not been recorded yet.
#[derive(Debug)]
#[must_use]
pub struct PendingAnswer {
    question_index: usize,
}

impl PendingAnswer {
    /// Position of the user turn this answer belongs to.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}

/// Append-only study buddy transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the learner's question before the answer is requested.
    pub fn begin(&mut self, question: impl Into<String>) -> PendingAnswer {
        self.turns.push(ChatTurn::user(question));
        PendingAnswer {
            question_index: self.turns.len() - 1,
        }
    }

    /// Record the outcome for `pending`. A failure becomes a fixed assistant message;
    /// the error itself is not kept.
    pub fn resolve<E>(&mut self, _pending: PendingAnswer, answer: Result<String, E>) {
        let content = answer.unwrap_or_else(|_| ANSWER_ERROR_MESSAGE.to_string());
        self.turns.push(ChatTurn::assistant(content));
    }

    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn questions_asked(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.speaker() == Speaker::User)
            .count()
    }
}
