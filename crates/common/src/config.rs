use std::time::Duration;

use crate::error::{HeraldError, Result};
use crate::types::RecordSelection;

const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// OAuth token for the Practicum homework API
    pub practicum_token: String,

    /// Homework statuses endpoint
    pub practicum_endpoint: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives the notifications
    pub telegram_chat_id: String,

    /// Telegram Bot API base URL (overridable for tests and proxies)
    pub telegram_api_url: String,

    /// Pause between poll cycles in seconds (default: 600)
    pub retry_time_secs: u64,

    /// Timeout applied to every outgoing HTTP request in seconds (default: 30)
    pub request_timeout_secs: u64,

    /// Which records of a batch produce notifications (default: first)
    pub selection: RecordSelection,

    /// Initial `from_date` cursor; wall-clock time when unset
    pub from_date: Option<i64>,
}

// Tokens stay out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_time_secs", &self.retry_time_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("selection", &self.selection)
            .field("from_date", &self.from_date)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing, so `PRACTICUM_TOKEN=` fails the same way
    /// as an unset variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| {
                HeraldError::Config(format!("{key} environment variable is required"))
            })
        };

        let config = Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            practicum_endpoint: get("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_time_secs: get("RETRY_TIME_SECS")
                .unwrap_or_else(|| "600".to_string())
                .parse()
                .map_err(|_| HeraldError::Config("RETRY_TIME_SECS must be a valid u64".into()))?,
            request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| {
                    HeraldError::Config("REQUEST_TIMEOUT_SECS must be a valid u64".into())
                })?,
            selection: get("HOMEWORK_SELECTION")
                .map(|v| v.parse::<RecordSelection>())
                .transpose()?
                .unwrap_or_default(),
            from_date: get("HOMEWORK_FROM_DATE")
                .map(|v| {
                    v.parse::<i64>().map_err(|_| {
                        HeraldError::Config("HOMEWORK_FROM_DATE must be a unix timestamp".into())
                    })
                })
                .transpose()?,
        };

        if config.request_timeout_secs == 0 {
            return Err(HeraldError::Config(
                "REQUEST_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }

        Ok(config)
    }

    pub fn retry_time(&self) -> Duration {
        Duration::from_secs(self.retry_time_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
