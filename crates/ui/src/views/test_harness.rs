use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{BusyAction, ContentClient, DashboardController, GenerationError};
use study_core::model::{Flashcard, QuizQuestion};

use crate::context::{UiApp, build_app_context};
use crate::routes::{Layout, LayoutTestHandles};

pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(20);

#[derive(Default)]
pub struct FakeClient {
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), GenerationError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(GenerationError::MissingField("payload"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentClient for FakeClient {
    async fn generate_flashcards(&self, notes: &str) -> Result<Vec<Flashcard>, GenerationError> {
        self.record(format!("flashcards:{notes}"))?;
        Ok(vec![
            Flashcard::new("Mitosis", "Cell division").unwrap(),
            Flashcard::new("Osmosis", "Water diffusion").unwrap(),
        ])
    }

    async fn generate_quiz(
        &self,
        source_text: &str,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        self.record(format!("quiz:{source_text}"))?;
        Ok(vec![
            QuizQuestion::new(
                "Largest planet?",
                vec!["Venus".into(), "Jupiter".into()],
                1,
                "Jupiter is a gas giant.",
            )
            .unwrap(),
            QuizQuestion::new(
                "Closest star?",
                vec!["The Sun".into(), "Sirius".into()],
                0,
                "",
            )
            .unwrap(),
        ])
    }

    async fn ask_question(&self, question: &str) -> Result<String, GenerationError> {
        self.record(format!("ask:{question}"))?;
        Ok("**Photosynthesis** turns light into sugar.".to_string())
    }
}

struct TestApp {
    client: Arc<FakeClient>,
}

impl UiApp for TestApp {
    fn content_client(&self) -> Arc<dyn ContentClient> {
        self.client.clone()
    }

    fn feedback_window(&self) -> Duration {
        FEEDBACK_WINDOW
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: LayoutTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn LayoutHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Layout {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub client: Arc<FakeClient>,
    handles: LayoutTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned requests and feedback timers run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn update(&mut self, f: impl FnOnce(&mut DashboardController)) {
        let mut controller = self.handles.controller();
        self.dom.in_runtime(|| f(&mut controller.write()));
        drive_dom(&mut self.dom);
    }

    pub fn snapshot(&self) -> DashboardController {
        let controller = self.handles.controller();
        self.dom.in_runtime(|| controller.read().clone())
    }

    pub fn submit(&mut self, action: BusyAction) {
        let actions = self.handles.actions();
        self.dom.in_runtime(|| actions.submit.call(action));
        drive_dom(&mut self.dom);
    }

    pub fn answer(&mut self, index: usize) {
        let actions = self.handles.actions();
        self.dom.in_runtime(|| actions.answer.call(index));
        drive_dom(&mut self.dom);
    }

    pub fn close_quiz(&mut self) {
        let actions = self.handles.actions();
        self.dom.in_runtime(|| actions.close_quiz.call(()));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(client: FakeClient) -> ViewHarness {
    let client = Arc::new(client);
    let handles = LayoutTestHandles::default();
    let app = Arc::new(TestApp {
        client: Arc::clone(&client),
    });

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            LayoutHarness,
            HarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        client,
        handles,
    };
    harness.rebuild();
    harness
}
