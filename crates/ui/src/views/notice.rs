use dioxus::prelude::*;
use services::DashboardController;

/// Blocking notice for failed generation requests.
#[component]
pub fn NoticeModal() -> Element {
    let mut controller = use_context::<Signal<DashboardController>>();
    let notice = controller.read().notice().map(str::to_string);

    let Some(message) = notice else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal",
                role: "alertdialog",
                aria_modal: "true",
                aria_labelledby: "notice-message",
                p { class: "modal__message", id: "notice-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    id: "notice-dismiss",
                    r#type: "button",
                    onclick: move |_| controller.write().dismiss_notice(),
                    "OK"
                }
            }
        }
    }
}
