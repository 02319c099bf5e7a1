use dioxus::prelude::*;
use services::{ActiveView, DashboardController};

use crate::context::AppContext;
use crate::views::{
    DashboardView, FlashcardsView, NoticeModal, QuizView, StudyBuddyView, use_dashboard_actions,
};

#[component]
pub fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_context_provider(|| Signal::new(DashboardController::new()));
    let actions = use_dashboard_actions(controller, &ctx);
    use_context_provider(|| actions);

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<LayoutTestHandles>() {
            handles.register(controller, actions);
        }
    }

    let active = controller.read().active_view();
    rsx! {
        div { class: "app",
            Sidebar { active }
            main { class: "content",
                match active {
                    ActiveView::Dashboard => rsx! { DashboardView {} },
                    ActiveView::Flashcards => rsx! { FlashcardsView {} },
                    ActiveView::Quiz => rsx! { QuizView {} },
                    ActiveView::StudyBuddy => rsx! { StudyBuddyView {} },
                }
            }
            NoticeModal {}
        }
    }
}

#[component]
fn Sidebar(active: ActiveView) -> Element {
    let controller = use_context::<Signal<DashboardController>>();
    let tabs = ActiveView::ALL.into_iter().map(|view| {
        let class = if view == active {
            "sidebar-tab sidebar-tab--active"
        } else {
            "sidebar-tab"
        };
        let mut controller = controller;
        rsx! {
            button {
                key: "{view.label()}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| controller.write().show(view),
                "{view.label()}"
            }
        }
    });

    rsx! {
        nav { class: "sidebar",
            h1 { "StudyBot" }
            {tabs}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LayoutTestHandles {
    controller: std::rc::Rc<std::cell::RefCell<Option<Signal<DashboardController>>>>,
    actions: std::rc::Rc<std::cell::RefCell<Option<crate::views::DashboardActions>>>,
}

#[cfg(test)]
impl LayoutTestHandles {
    pub(crate) fn register(
        &self,
        controller: Signal<DashboardController>,
        actions: crate::views::DashboardActions,
    ) {
        *self.controller.borrow_mut() = Some(controller);
        *self.actions.borrow_mut() = Some(actions);
    }

    pub(crate) fn controller(&self) -> Signal<DashboardController> {
        (*self.controller.borrow()).expect("controller registered")
    }

    pub(crate) fn actions(&self) -> crate::views::DashboardActions {
        (*self.actions.borrow()).expect("actions registered")
    }
}
