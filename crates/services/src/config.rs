use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const ENV_API_BASE_URL: &str = "STUDYBOT_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "STUDYBOT_TIMEOUT_SECS";
pub const ENV_FEEDBACK_MS: &str = "STUDYBOT_FEEDBACK_MS";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// How long quiz feedback stays on screen before auto-advancing.
pub const DEFAULT_FEEDBACK_MS: u64 = 1_200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyBotConfig {
    api_base: Url,
    request_timeout: Duration,
    feedback_window: Duration,
}

impl Default for StudyBotConfig {
    fn default() -> Self {
        Self {
            api_base: parse_base_url(DEFAULT_API_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default base URL is valid")),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            feedback_window: Duration::from_millis(DEFAULT_FEEDBACK_MS),
        }
    }
}

impl StudyBotConfig {
    /// Read configuration from the process environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = non_blank(lookup(ENV_API_BASE_URL)) {
            config = config.with_api_base(&raw)?;
        }
        if let Some(raw) = non_blank(lookup(ENV_TIMEOUT_SECS)) {
            config = config.with_timeout_secs(parse_positive(ENV_TIMEOUT_SECS, &raw)?)?;
        }
        if let Some(raw) = non_blank(lookup(ENV_FEEDBACK_MS)) {
            config = config.with_feedback_ms(parse_positive(ENV_FEEDBACK_MS, &raw)?)?;
        }
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if `raw` is not an absolute http(s) URL.
    pub fn with_api_base(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_base = parse_base_url(raw)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Zero` for a zero timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::Zero("request timeout"));
        }
        self.request_timeout = Duration::from_secs(secs);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Zero` for a zero window.
    pub fn with_feedback_ms(mut self, millis: u64) -> Result<Self, ConfigError> {
        if millis == 0 {
            return Err(ConfigError::Zero("feedback window"));
        }
        self.feedback_window = Duration::from_millis(millis);
        Ok(self)
    }

    #[must_use]
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn feedback_window(&self) -> Duration {
        self.feedback_window
    }

    /// Full URL for an endpoint below the API base, e.g. `quiz`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        raw: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        key,
        raw: raw.to_string(),
    })
}
