use dioxus::prelude::*;
use services::DashboardController;

use crate::vm::{FeatureStatVm, map_dashboard_cards};

#[component]
pub fn DashboardView() -> Element {
    let controller = use_context::<Signal<DashboardController>>();
    let cards = map_dashboard_cards(&controller.read().summary());

    let cards = cards.into_iter().map(|card| {
        let mut controller = controller;
        let view = card.view;
        rsx! {
            div { key: "{card.title}", class: "feature-card",
                div { class: "feature-card__icon", "{card.icon}" }
                div { class: "feature-card__title", "{card.title}" }
                p { class: "feature-card__blurb", "{card.blurb}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| controller.write().show(view),
                    "{card.cta}"
                }
                match card.stat {
                    Some(FeatureStatVm::Progress { width, label }) => rsx! {
                        div { class: "feature-card__stat",
                            div { class: "feature-card__stat-label", "Progress" }
                            div { class: "progress",
                                div { class: "progress__fill", style: "{width}" }
                            }
                            div { class: "feature-card__stat-value", "{label}" }
                        }
                    },
                    Some(FeatureStatVm::Count { label, value }) => rsx! {
                        div { class: "feature-card__stat",
                            div { class: "feature-card__stat-label", "{label}" }
                            div { class: "feature-card__stat-value", "{value}" }
                        }
                    },
                    None => rsx! {},
                }
            }
        }
    });

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Dashboard" }
            }
            div { class: "feature-grid", {cards} }
        }
    }
}
