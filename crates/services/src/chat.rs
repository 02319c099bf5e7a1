use tracing::warn;

use study_core::session::{ChatSession, PendingAnswer};

use crate::content_client::ContentClient;
use crate::error::GenerationError;

/// Ask the study buddy and append both turns to `chat`.
///
/// Never fails: a generation error is recorded as the fixed assistant message.
pub async fn ask(chat: &mut ChatSession, client: &dyn ContentClient, question: &str) {
    let pending = chat.begin(question);
    let answer = client.ask_question(question).await;
    record_answer(chat, pending, answer);
}

/// Append the assistant turn for `pending`, logging the failure if there is one.
pub fn record_answer(
    chat: &mut ChatSession,
    pending: PendingAnswer,
    answer: Result<String, GenerationError>,
) {
    if let Err(err) = &answer {
        warn!(error = %err, turn = pending.question_index(), "study buddy request failed");
    }
    chat.resolve(pending, answer);
}
