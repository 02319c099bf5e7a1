#![forbid(unsafe_code)]

pub mod chat;
pub mod config;
pub mod content_client;
pub mod dashboard;
pub mod error;

pub use config::StudyBotConfig;
pub use content_client::{ContentClient, HttpContentClient};
pub use dashboard::{
    ActiveView, BusyAction, ChatRequest, DashboardController, DashboardSummary, FeatureProgress,
    SubmitOutcome,
};
pub use error::{ConfigError, GenerationError, SubmitError};
