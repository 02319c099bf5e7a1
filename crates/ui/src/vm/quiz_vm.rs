use study_core::session::{QuizResult, QuizSession, QuizState};

use crate::vm::dashboard_vm::progress_width;

/// How an option is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    /// Nothing answered yet.
    Idle,
    /// The picked option, and it was right.
    Correct,
    /// The picked option, and it was wrong.
    Wrong,
    /// The right option after a wrong pick.
    Revealed,
    Dimmed,
}

impl OptionMark {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "quiz-option",
            Self::Correct => "quiz-option quiz-option--correct",
            Self::Wrong => "quiz-option quiz-option--wrong",
            Self::Revealed => "quiz-option quiz-option--revealed",
            Self::Dimmed => "quiz-option quiz-option--dimmed",
        }
    }
}

#[must_use]
pub fn option_mark(selected: Option<usize>, correct: usize, index: usize) -> OptionMark {
    match selected {
        None => OptionMark::Idle,
        Some(picked) if picked == index && index == correct => OptionMark::Correct,
        Some(picked) if picked == index => OptionMark::Wrong,
        Some(_) if index == correct => OptionMark::Revealed,
        Some(_) => OptionMark::Dimmed,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub label: String,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub position_label: String,
    pub question: String,
    pub options: Vec<QuizOptionVm>,
    /// Options stop accepting clicks once one is picked.
    pub locked: bool,
    pub explanation: Option<String>,
    pub progress_width: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub title: &'static str,
    pub score_label: String,
}

impl From<QuizResult> for QuizResultVm {
    fn from(result: QuizResult) -> Self {
        Self {
            title: "Quiz Complete!",
            score_label: format!(
                "You scored {} out of {} ({}%)",
                result.score,
                result.total,
                result.percent()
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Form,
    Question(QuizQuestionVm),
    Result(QuizResultVm),
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreenVm {
    match session.state() {
        QuizState::Empty => QuizScreenVm::Form,
        QuizState::Complete(result) => QuizScreenVm::Result((*result).into()),
        QuizState::InProgress(run) => {
            let question = run.current();
            let selected = run.selected();
            let options = question
                .options()
                .iter()
                .enumerate()
                .map(|(index, label)| QuizOptionVm {
                    index,
                    label: label.clone(),
                    mark: option_mark(selected, question.correct_index(), index),
                })
                .collect();
            let explanation = selected
                .map(|_| question.explanation())
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string);

            QuizQuestionVm {
                position_label: format!(
                    "Question {} of {}",
                    session.question_number(),
                    session.len()
                ),
                question: question.question().to_string(),
                options,
                locked: selected.is_some(),
                explanation,
                progress_width: progress_width(session.progress()),
            }
            .into()
        }
    }
}

impl From<QuizQuestionVm> for QuizScreenVm {
    fn from(vm: QuizQuestionVm) -> Self {
        Self::Question(vm)
    }
}
