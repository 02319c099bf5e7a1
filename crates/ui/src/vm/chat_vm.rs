use study_core::model::Speaker;
use study_core::session::ChatSession;

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatBodyVm {
    Text(String),
    /// Sanitized HTML rendered from the assistant's markdown.
    Html(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurnVm {
    pub class: &'static str,
    pub body: ChatBodyVm,
}

#[must_use]
pub fn map_chat_turns(chat: &ChatSession) -> Vec<ChatTurnVm> {
    chat.turns()
        .iter()
        .map(|turn| match turn.speaker() {
            Speaker::User => ChatTurnVm {
                class: "chat-turn chat-turn--user",
                body: ChatBodyVm::Text(turn.content().to_string()),
            },
            Speaker::Assistant => ChatTurnVm {
                class: "chat-turn chat-turn--assistant",
                body: ChatBodyVm::Html(markdown_to_html(turn.content())),
            },
        })
        .collect()
}
