/// Extraction port trait
///
/// Defines the interface for the language-model service that turns a raw
/// transcript into structured minutes. Implementation: Gemini adapter.
use crate::domain::models::MeetingMinutes;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for minutes extraction
#[async_trait]
pub trait ExtractionPort: Send + Sync {
    /// Extract structured minutes from a transcript.
    ///
    /// Returns a schema-conforming `MeetingMinutes` or fails; implementations
    /// must never hand back partially valid data.
    async fn extract_minutes(&self, transcript: &str) -> Result<MeetingMinutes>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
