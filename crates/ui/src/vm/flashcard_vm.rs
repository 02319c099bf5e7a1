use study_core::session::FlashcardSession;

use crate::vm::dashboard_vm::progress_width;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardViewerVm {
    pub position_label: String,
    pub text: String,
    pub face_label: &'static str,
    pub is_face_up: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub progress_width: String,
}

/// `None` while no deck is loaded, which is when the notes form is shown.
#[must_use]
pub fn map_flashcard_viewer(session: &FlashcardSession) -> Option<FlashcardViewerVm> {
    let position = session.position()?;
    let text = session.visible_text()?.to_string();
    let is_face_up = session.is_face_up();

    Some(FlashcardViewerVm {
        position_label: format!("Card {} of {}", position.number, position.total),
        text,
        face_label: if is_face_up { "Back" } else { "Front" },
        is_face_up,
        can_go_previous: session.can_go_previous(),
        can_go_next: session.can_go_next(),
        progress_width: progress_width(session.progress()),
    })
}
