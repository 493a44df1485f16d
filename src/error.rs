/// Error types for meeting-agent
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript not found: {0}")]
    InputNotFound(String),

    #[error("Failed to read transcript: {0}")]
    InputRead(String),

    #[error("Extraction request failed: {0}")]
    ExtractionNetwork(String),

    #[error("Extraction service rejected credentials: {0}")]
    ExtractionAuth(String),

    #[error("Extraction response did not match the minutes schema: {0}")]
    ExtractionFormat(String),

    #[error("Database error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("Notification service rejected credentials: {0}")]
    NotificationAuth(String),

    #[error("Notification request failed: {0}")]
    NotificationNetwork(String),

    #[error("Notification service throttled the request: {0}")]
    NotificationRateLimit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Name of the pipeline stage this error belongs to, for operator reports.
    pub fn stage(&self) -> &'static str {
        match self {
            AppError::Config(_) => "configuration",
            AppError::InputNotFound(_) | AppError::InputRead(_) => "input",
            AppError::ExtractionNetwork(_)
            | AppError::ExtractionAuth(_)
            | AppError::ExtractionFormat(_) => "extraction",
            AppError::Persistence(_) => "persistence",
            AppError::NotificationAuth(_)
            | AppError::NotificationNetwork(_)
            | AppError::NotificationRateLimit(_) => "notification",
            AppError::Io(_) => "io",
        }
    }

    /// Notification errors are recovered locally by the orchestrator; the
    /// record is already durable when they occur.
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            AppError::NotificationAuth(_)
                | AppError::NotificationNetwork(_)
                | AppError::NotificationRateLimit(_)
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
