/// Domain models for meeting-agent
///
/// These models represent core business entities and are service-agnostic.
use serde::{Deserialize, Serialize};

/// Structured minutes extracted from one transcript.
///
/// This is exactly the shape persisted as `structured_payload`: the
/// extraction client either produces a value of this type or fails, so a
/// stored payload always conforms. `meeting_date` tolerates absence;
/// `participants`, `action_items` and `decisions` are required keys in the
/// model's JSON output. Unknown extra keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingMinutes {
    pub meeting_date: Option<String>,
    pub participants: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub decisions: Vec<String>,
}

/// A single action item from the minutes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
    pub task: String,
    /// Display name of the owner; `None` means unassigned
    pub owner: Option<String>,
    /// Due date as stated in the meeting, verbatim; `None` means undated
    pub due_date: Option<String>,
}

/// A fully persisted meeting record, as read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRecord {
    pub id: i64,
    pub minutes: MeetingMinutes,
    pub raw_transcript: String,
    /// RFC 3339 UTC timestamp assigned by the store at insert time
    pub created_at: String,
}

/// Summary row for operator inspection (`recent` command)
#[derive(Debug, Clone)]
pub struct RecordSummary {
    pub id: i64,
    pub meeting_date: Option<String>,
    pub created_at: String,
}
