/// Notifier port trait
///
/// Defines the interface for posting a minutes summary to a channel.
/// Implementation: Slack adapter. Future integrations (Jira, Notion) add
/// implementations here without touching the pipeline.
use crate::domain::models::MeetingMinutes;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for notification delivery
#[async_trait]
pub trait NotifierPort: Send + Sync {
    /// Post a human-readable summary of the minutes.
    ///
    /// Best-effort: the pipeline logs failures and continues, since the
    /// record is already durable by the time this runs.
    async fn send_minutes(&self, title: &str, minutes: &MeetingMinutes) -> Result<()>;
}
