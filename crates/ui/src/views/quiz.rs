use dioxus::prelude::*;
use services::{BusyAction, DashboardController};

use crate::views::DashboardActions;
use crate::vm::{QuizScreenVm, map_quiz_screen};

#[component]
pub fn QuizView() -> Element {
    let controller = use_context::<Signal<DashboardController>>();
    let actions = use_context::<DashboardActions>();
    let screen = map_quiz_screen(controller.read().quiz());

    rsx! {
        div { class: "page quiz-page",
            match screen {
                QuizScreenVm::Form => rsx! { QuizForm {} },
                QuizScreenVm::Question(vm) => {
                    let locked = vm.locked;
                    let options = vm.options.into_iter().map(|option| {
                        let index = option.index;
                        rsx! {
                            button {
                                key: "{index}",
                                class: "{option.mark.class()}",
                                r#type: "button",
                                disabled: locked,
                                onclick: move |_| actions.answer.call(index),
                                "{option.label}"
                            }
                        }
                    });
                    rsx! {
                        div { class: "quiz-runner",
                            p { class: "quiz-position", "{vm.position_label}" }
                            div { class: "quiz-card",
                                div { class: "quiz-question", "{vm.question}" }
                                div { class: "quiz-options", {options} }
                                if let Some(explanation) = vm.explanation {
                                    div { class: "quiz-explanation",
                                        div { class: "quiz-explanation__title", "Explanation:" }
                                        div { "{explanation}" }
                                    }
                                }
                            }
                            div { class: "progress",
                                div { class: "progress__fill", style: "{vm.progress_width}" }
                            }
                        }
                    }
                }
                QuizScreenVm::Result(vm) => rsx! {
                    div { class: "quiz-result",
                        h2 { class: "quiz-result__title", "{vm.title}" }
                        p { class: "quiz-result__score", "{vm.score_label}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| actions.close_quiz.call(()),
                            "Back to Dashboard"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn QuizForm() -> Element {
    let mut controller = use_context::<Signal<DashboardController>>();
    let actions = use_context::<DashboardActions>();
    let text = controller.read().quiz_input().to_string();
    let can_submit = controller.read().can_submit(BusyAction::Quiz);
    let pending = controller.read().busy_action() == Some(BusyAction::Quiz);

    rsx! {
        div { class: "feature-form",
            h2 { class: "view-title", "Create a Quiz" }
            textarea {
                class: "feature-form__input",
                placeholder: "Paste text here to create a quiz...",
                rows: "8",
                value: "{text}",
                oninput: move |evt| controller.write().set_quiz_input(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| actions.submit.call(BusyAction::Quiz),
                if pending { "Creating..." } else { "Create Quiz" }
            }
        }
    }
}
