//! Slack notifier adapter
//!
//! Implements the NotifierPort by posting a minutes summary to a channel
//! via chat.postMessage, as Block Kit sections plus a plain-text fallback.
//! Delivery is best-effort; the pipeline treats every error here as
//! non-fatal because the record is already stored.

use crate::domain::models::MeetingMinutes;
use crate::error::{AppError, Result};
use crate::ports::notify::NotifierPort;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SLACK_API_BASE: &str = "https://slack.com/api";

// Slack reports these when the token itself is the problem.
const AUTH_ERRORS: &[&str] = &[
    "invalid_auth",
    "not_authed",
    "token_revoked",
    "account_inactive",
    "missing_scope",
];

/// Slack notifier implementation
pub struct SlackNotifier {
    client: Client,
    token: String,
    channel: String,
}

#[derive(Debug, Serialize)]
struct PostMessageRequest {
    channel: String,
    text: String,
    blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
struct Block {
    #[serde(rename = "type")]
    block_type: &'static str,
    text: BlockText,
}

#[derive(Debug, Serialize)]
struct BlockText {
    #[serde(rename = "type")]
    text_type: &'static str,
    text: String,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
    ts: Option<String>,
}

fn section(text: String) -> Block {
    Block {
        block_type: "section",
        text: BlockText {
            text_type: "mrkdwn",
            text,
        },
    }
}

impl SlackNotifier {
    /// Create a new Slack notifier for the given token and channel
    pub fn new(token: String, channel: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            token,
            channel,
        }
    }
}

#[async_trait]
impl NotifierPort for SlackNotifier {
    async fn send_minutes(&self, title: &str, minutes: &MeetingMinutes) -> Result<()> {
        let date = minutes.meeting_date.as_deref().unwrap_or("date unknown");
        let request_body = PostMessageRequest {
            channel: self.channel.clone(),
            text: format!("Minutes: {} ({})", title, date),
            blocks: build_blocks(title, minutes),
        };

        log::info!("Posting minutes for '{}' to channel {}", title, self.channel);

        let response = self
            .client
            .post(format!("{}/chat.postMessage", SLACK_API_BASE))
            .bearer_auth(&self.token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::NotificationNetwork(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::NotificationRateLimit(format!(
                "HTTP {}",
                status
            )));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::NotificationNetwork(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let api_response: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| AppError::NotificationNetwork(e.to_string()))?;

        if !api_response.ok {
            let error = api_response
                .error
                .unwrap_or_else(|| "unknown_error".to_string());
            return Err(classify_api_error(error));
        }

        log::info!(
            "Minutes posted to channel {} (ts={})",
            self.channel,
            api_response.ts.as_deref().unwrap_or("-")
        );
        Ok(())
    }
}

/// Map a Slack-reported error string onto the notification error taxonomy.
fn classify_api_error(error: String) -> AppError {
    if AUTH_ERRORS.contains(&error.as_str()) {
        AppError::NotificationAuth(error)
    } else if error == "ratelimited" {
        AppError::NotificationRateLimit(error)
    } else {
        AppError::NotificationNetwork(error)
    }
}

/// Render the minutes as Block Kit sections.
///
/// Participants and action-item sections are skipped when empty; the
/// decisions section is always omitted when there are no decisions.
fn build_blocks(title: &str, minutes: &MeetingMinutes) -> Vec<Block> {
    let mut blocks = vec![section(format!(
        "*{}* — {}",
        title,
        minutes.meeting_date.as_deref().unwrap_or("date unknown")
    ))];

    if !minutes.participants.is_empty() {
        blocks.push(section(format!(
            "*Participants:* {}",
            minutes.participants.join(", ")
        )));
    }

    if !minutes.action_items.is_empty() {
        let lines: Vec<String> = minutes
            .action_items
            .iter()
            .map(|item| {
                let owner = item.owner.as_deref().unwrap_or("(unassigned)");
                match item.due_date.as_deref() {
                    Some(due) => format!("• {} — {} — due {}", item.task, owner, due),
                    None => format!("• {} — {}", item.task, owner),
                }
            })
            .collect();
        blocks.push(section(format!("*Action items*\n{}", lines.join("\n"))));
    }

    if !minutes.decisions.is_empty() {
        let lines: Vec<String> = minutes
            .decisions
            .iter()
            .map(|d| format!("• {}", d))
            .collect();
        blocks.push(section(format!("*Decisions*\n{}", lines.join("\n"))));
    }

    blocks
}
