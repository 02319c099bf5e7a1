use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use study_core::model::{Flashcard, QuizQuestion};

use crate::config::StudyBotConfig;
use crate::error::{ConfigError, GenerationError};

/// Boundary to the content generators. Every call is a single request with no
/// retries and no caching.
#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Generate a non-empty deck from free-form notes.
    async fn generate_flashcards(&self, notes: &str) -> Result<Vec<Flashcard>, GenerationError>;

    /// Generate a non-empty multiple-choice quiz from source text.
    async fn generate_quiz(&self, source_text: &str)
    -> Result<Vec<QuizQuestion>, GenerationError>;

    /// Answer a single study question.
    async fn ask_question(&self, question: &str) -> Result<String, GenerationError>;
}

const FLASHCARDS_PATH: &str = "flashcards";
const QUIZ_PATH: &str = "quiz";
const STUDY_BUDDY_PATH: &str = "study-buddy";

/// `ContentClient` backed by the JSON endpoints below the configured API base.
#[derive(Clone)]
pub struct HttpContentClient {
    client: Client,
    config: StudyBotConfig,
}

impl HttpContentClient {
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if the HTTP client cannot be built.
    pub fn new(config: StudyBotConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &StudyBotConfig {
        &self.config
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, GenerationError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "sending content request");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "content request rejected");
            return Err(GenerationError::HttpStatus(status));
        }

        let bytes = response.bytes().await?;
        let parsed = serde_json::from_slice(&bytes)?;
        debug!(%url, bytes = bytes.len(), "content response received");
        Ok(parsed)
    }
}

#[async_trait]
impl ContentClient for HttpContentClient {
    async fn generate_flashcards(&self, notes: &str) -> Result<Vec<Flashcard>, GenerationError> {
        let body: FlashcardsResponse = self
            .post(FLASHCARDS_PATH, &FlashcardsRequest { notes })
            .await?;
        parse_flashcards(body)
    }

    async fn generate_quiz(
        &self,
        source_text: &str,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        let body: QuizResponse = self
            .post(QUIZ_PATH, &QuizRequest { text: source_text })
            .await?;
        parse_quiz(body)
    }

    async fn ask_question(&self, question: &str) -> Result<String, GenerationError> {
        let body: AnswerResponse = self
            .post(STUDY_BUDDY_PATH, &AnswerRequest { question })
            .await?;
        parse_answer(body)
    }
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct FlashcardsRequest<'a> {
    notes: &'a str,
}

#[derive(Debug, Serialize)]
struct QuizRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct FlashcardsResponse {
    flashcards: Option<Vec<WireFlashcard>>,
}

#[derive(Debug, Deserialize)]
struct WireFlashcard {
    front: String,
    back: String,
}

#[derive(Debug, Deserialize)]
struct QuizResponse {
    quiz: Option<Vec<WireQuestion>>,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    question: String,
    options: Vec<String>,
    #[serde(alias = "correctIndex")]
    correct: usize,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct AnswerResponse {
    answer: Option<String>,
}

fn parse_flashcards(body: FlashcardsResponse) -> Result<Vec<Flashcard>, GenerationError> {
    let cards = body
        .flashcards
        .ok_or(GenerationError::MissingField("flashcards"))?;
    if cards.is_empty() {
        return Err(GenerationError::EmptyPayload("flashcards"));
    }
    cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            Flashcard::new(card.front, card.back)
                .map_err(|source| GenerationError::InvalidFlashcard { index, source })
        })
        .collect()
}

fn parse_quiz(body: QuizResponse) -> Result<Vec<QuizQuestion>, GenerationError> {
    let questions = body.quiz.ok_or(GenerationError::MissingField("quiz"))?;
    if questions.is_empty() {
        return Err(GenerationError::EmptyPayload("quiz questions"));
    }
    questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| {
            QuizQuestion::new(q.question, q.options, q.correct, q.explanation)
                .map_err(|source| GenerationError::InvalidQuestion { index, source })
        })
        .collect()
}

fn parse_answer(body: AnswerResponse) -> Result<String, GenerationError> {
    let answer = body.answer.ok_or(GenerationError::MissingField("answer"))?;
    if answer.trim().is_empty() {
        return Err(GenerationError::EmptyPayload("answer"));
    }
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use study_core::model::{FlashcardError, QuizQuestionError};

    use super::*;

    fn decode<T: DeserializeOwned>(json: &str) -> T {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flashcards_missing_key_is_an_error() {
        let err = parse_flashcards(decode(r#"{"error":"nope"}"#)).unwrap_err();
        assert!(matches!(err, GenerationError::MissingField("flashcards")));
    }

    #[test]
    fn flashcards_empty_list_is_an_error() {
        let err = parse_flashcards(decode(r#"{"flashcards":[]}"#)).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyPayload(_)));
    }

    #[test]
    fn flashcards_blank_side_is_an_error() {
        let err = parse_flashcards(decode(
            r#"{"flashcards":[{"front":"a","back":"b"},{"front":"","back":"c"}]}"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidFlashcard {
                index: 1,
                source: FlashcardError::EmptyFront
            }
        ));
    }

    #[test]
    fn flashcards_parse_in_order() {
        let cards = parse_flashcards(decode(
            r#"{"flashcards":[{"front":"H2O","back":"Water"},{"front":"NaCl","back":"Salt"}]}"#,
        ))
        .unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].front(), "H2O");
        assert_eq!(cards[1].back(), "Salt");
    }

    #[test]
    fn quiz_accepts_both_index_keys() {
        let questions = parse_quiz(decode(
            r#"{"quiz":[
                {"question":"1+1?","options":["1","2"],"correct":1,"explanation":"sum"},
                {"question":"2+2?","options":["4","5"],"correctIndex":0}
            ]}"#,
        ))
        .unwrap();
        assert_eq!(questions[0].correct_index(), 1);
        assert_eq!(questions[1].correct_index(), 0);
        assert_eq!(questions[1].explanation(), "");
    }

    #[test]
    fn quiz_out_of_range_index_is_an_error() {
        let err = parse_quiz(decode(
            r#"{"quiz":[{"question":"?","options":["a","b"],"correct":2,"explanation":""}]}"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidQuestion {
                index: 0,
                source: QuizQuestionError::CorrectIndexOutOfRange { .. }
            }
        ));
    }

    #[test]
    fn quiz_missing_key_is_an_error() {
        let err = parse_quiz(decode(r"{}")).unwrap_err();
        assert!(matches!(err, GenerationError::MissingField("quiz")));
    }

    #[test]
    fn answer_missing_or_blank_is_an_error() {
        let err = parse_answer(decode(r"{}")).unwrap_err();
        assert!(matches!(err, GenerationError::MissingField("answer")));

        let err = parse_answer(decode(r#"{"answer":"  "}"#)).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyPayload("answer")));

        let answer = parse_answer(decode(r#"{"answer":"Photosynthesis."}"#)).unwrap();
        assert_eq!(answer, "Photosynthesis.");
    }
}
