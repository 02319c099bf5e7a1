//! Shared error types for the services crate.

use thiserror::Error;

use study_core::model::{FlashcardError, QuizQuestionError};

/// Errors emitted by a `ContentClient`.
///
/// A response without the expected payload is a failure, never an empty result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("content request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("content response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("content response is missing `{0}`")]
    MissingField(&'static str),
    #[error("content response contained no {0}")]
    EmptyPayload(&'static str),
    #[error("flashcard {index} is invalid: {source}")]
    InvalidFlashcard {
        index: usize,
        #[source]
        source: FlashcardError,
    },
    #[error("quiz question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuizQuestionError,
    },
}

/// Reasons a dashboard submission is refused before any request is sent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("nothing to submit")]
    EmptyInput,
    #[error("another request is still in flight")]
    Busy,
}

/// Errors emitted while building configuration or the HTTP client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL `{raw}`: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),
    #[error("invalid value for {key}: `{raw}`")]
    InvalidNumber { key: &'static str, raw: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}
