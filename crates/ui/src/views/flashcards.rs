use dioxus::prelude::*;
use services::{BusyAction, DashboardController};

use crate::views::DashboardActions;
use crate::vm::map_flashcard_viewer;

#[component]
pub fn FlashcardsView() -> Element {
    let controller = use_context::<Signal<DashboardController>>();
    let viewer = map_flashcard_viewer(controller.read().flashcards());

    rsx! {
        div { class: "page flashcards-page",
            match viewer {
                None => rsx! { FlashcardsForm {} },
                Some(vm) => {
                    let mut controller = controller;
                    let card_class = if vm.is_face_up {
                        "flashcard flashcard--flipped"
                    } else {
                        "flashcard"
                    };
                    rsx! {
                        div { class: "flashcard-viewer",
                            p { class: "flashcard-position", "{vm.position_label}" }
                            button {
                                class: "{card_class}",
                                id: "flashcard",
                                r#type: "button",
                                aria_label: "{vm.face_label}",
                                onclick: move |_| controller.write().flip_card(),
                                span { class: "flashcard__text", "{vm.text}" }
                            }
                            div { class: "flashcard-nav",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: !vm.can_go_previous,
                                    onclick: move |_| {
                                        controller.write().previous_card();
                                    },
                                    "Previous"
                                }
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| controller.write().close_flashcards(),
                                    "Back to Dashboard"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: !vm.can_go_next,
                                    onclick: move |_| {
                                        controller.write().next_card();
                                    },
                                    "Next"
                                }
                            }
                            div { class: "progress",
                                div { class: "progress__fill", style: "{vm.progress_width}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FlashcardsForm() -> Element {
    let mut controller = use_context::<Signal<DashboardController>>();
    let actions = use_context::<DashboardActions>();
    let notes = controller.read().notes_input().to_string();
    let can_submit = controller.read().can_submit(BusyAction::Flashcards);
    let pending = controller.read().busy_action() == Some(BusyAction::Flashcards);

    rsx! {
        div { class: "feature-form",
            h2 { class: "view-title", "Generate Flashcards" }
            textarea {
                class: "feature-form__input",
                placeholder: "Paste your study notes here...",
                rows: "8",
                value: "{notes}",
                oninput: move |evt| controller.write().set_notes_input(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| actions.submit.call(BusyAction::Flashcards),
                if pending { "Generating..." } else { "Generate Flashcards" }
            }
        }
    }
}
