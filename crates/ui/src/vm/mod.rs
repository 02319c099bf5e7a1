mod chat_vm;
mod dashboard_vm;
mod flashcard_vm;
mod markdown_vm;
mod quiz_vm;

pub use chat_vm::{ChatBodyVm, ChatTurnVm, map_chat_turns};
pub use dashboard_vm::{FeatureCardVm, FeatureStatVm, map_dashboard_cards, progress_width};
pub use flashcard_vm::{FlashcardViewerVm, map_flashcard_viewer};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{
    OptionMark, QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizScreenVm, map_quiz_screen,
    option_mark,
};
