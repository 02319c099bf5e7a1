use dioxus::prelude::*;
use services::{BusyAction, DashboardController};

use crate::views::DashboardActions;
use crate::vm::{ChatBodyVm, map_chat_turns};

#[component]
pub fn StudyBuddyView() -> Element {
    let mut controller = use_context::<Signal<DashboardController>>();
    let actions = use_context::<DashboardActions>();
    let question = controller.read().chat_input().to_string();
    let can_submit = controller.read().can_submit(BusyAction::Chat);
    let pending = controller.read().busy_action() == Some(BusyAction::Chat);
    let turns = map_chat_turns(controller.read().chat());

    let turns = turns.into_iter().enumerate().map(|(idx, turn)| {
        rsx! {
            div { key: "{idx}", class: "{turn.class}",
                match turn.body {
                    ChatBodyVm::Text(text) => rsx! {
                        div { class: "chat-bubble", "{text}" }
                    },
                    ChatBodyVm::Html(html) => rsx! {
                        div { class: "chat-bubble chat-bubble--markdown", dangerous_inner_html: "{html}" }
                    },
                }
            }
        }
    });

    rsx! {
        div { class: "page study-buddy-page",
            h2 { class: "view-title", "Ask StudyBot" }
            div { class: "chat-form",
                input {
                    class: "chat-form__input",
                    r#type: "text",
                    placeholder: "Ask any study question...",
                    value: "{question}",
                    oninput: move |evt| controller.write().set_chat_input(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            actions.submit.call(BusyAction::Chat);
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: move |_| actions.submit.call(BusyAction::Chat),
                    if pending { "Thinking..." } else { "Ask" }
                }
            }
            div { class: "chat-transcript", {turns} }
        }
    }
}
