//! Environment-based configuration
//!
//! All credentials come from the environment; nothing is persisted or
//! hardcoded. Required variables are validated together at startup so the
//! operator sees every missing name at once.

use crate::error::{AppError, Result};
use std::env;
use std::path::PathBuf;

const MODEL_API_KEY: &str = "MODEL_API_KEY";
const NOTIFY_TOKEN: &str = "NOTIFY_TOKEN";
const NOTIFY_CHANNEL: &str = "NOTIFY_CHANNEL";
const MODEL_NAME: &str = "MODEL_NAME";
const MEETING_DB: &str = "MEETING_DB";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_DB: &str = "meeting_agent.db";

/// Immutable settings for one pipeline run
#[derive(Debug, Clone)]
pub struct Settings {
    /// API key for the extraction model
    pub model_api_key: String,
    /// Model identifier sent with each extraction request
    pub model_name: String,
    /// Bot token for the notification service
    pub notify_token: String,
    /// Destination channel id or name
    pub notify_channel: String,
    /// Path to the SQLite database file
    pub db_path: PathBuf,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// Fails with a single `Config` error naming every missing required
    /// variable; no partial operation is attempted.
    pub fn from_env() -> Result<Self> {
        let mut missing = Vec::new();

        let model_api_key = read_required(MODEL_API_KEY, &mut missing);
        let notify_token = read_required(NOTIFY_TOKEN, &mut missing);
        let notify_channel = read_required(NOTIFY_CHANNEL, &mut missing);

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing required environment variable(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            model_api_key,
            model_name: env::var(MODEL_NAME).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            notify_token,
            notify_channel,
            db_path: Self::db_path(),
        })
    }

    /// Database path lookup, usable on its own by read-only commands that
    /// need no API credentials.
    pub fn db_path() -> PathBuf {
        env::var(MEETING_DB)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB))
    }
}

fn read_required(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(val) if !val.is_empty() => val,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
