use std::sync::Arc;
use std::time::Duration;

use services::ContentClient;

pub trait UiApp: Send + Sync {
    fn content_client(&self) -> Arc<dyn ContentClient>;

    /// How long quiz feedback stays visible before the quiz moves on.
    fn feedback_window(&self) -> Duration;
}

#[derive(Clone)]
pub struct AppContext {
    content_client: Arc<dyn ContentClient>,
    feedback_window: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content_client: app.content_client(),
            feedback_window: app.feedback_window(),
        }
    }

    #[must_use]
    pub fn content_client(&self) -> Arc<dyn ContentClient> {
        Arc::clone(&self.content_client)
    }

    #[must_use]
    pub fn feedback_window(&self) -> Duration {
        self.feedback_window
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
