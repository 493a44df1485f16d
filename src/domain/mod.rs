/// Domain layer - core business models
///
/// These models are service-agnostic and represent core business entities.
pub mod models;
pub mod prompts;

pub use models::{ActionItem, MeetingMinutes, MeetingRecord, RecordSummary};
pub use prompts::PromptTemplates;
