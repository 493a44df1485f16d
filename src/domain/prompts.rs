//! Prompt template for minutes extraction
//!
//! The single extraction prompt and its placeholder convention. Owner
//! resolution is delegated to the model here, not re-derived client-side.

/// Prompt templates for extraction requests
pub struct PromptTemplates;

impl PromptTemplates {
    /// Extraction prompt for structured meeting minutes.
    ///
    /// The `{transcript}` placeholder is substituted by the extraction
    /// client before the request is sent.
    pub fn minutes() -> &'static str {
        r#"You are a meeting-minutes assistant. Analyze the following meeting transcript and return ONLY valid JSON (no markdown, no explanations, no extra text).

Meeting Transcript:
{transcript}

Return an object exactly matching this schema:
{
  "meeting_date": "YYYY-MM-DD or null if the transcript does not state one",
  "participants": ["display names of everyone who speaks or is mentioned as present"],
  "action_items": [
    {
      "task": "specific action",
      "owner": "participant display name or null if unassigned",
      "due_date": "due date as stated in the meeting, or null"
    }
  ],
  "decisions": ["one entry per decision reached, as free text"]
}

Rules:
- If a speaker says "I'll ..." or otherwise commits themselves, set that action's owner to that speaker's display name.
- If no one is responsible for a task, set "owner" to null.
- Keep due dates exactly as stated ("Friday", "end of Q3"); do not invent dates.
- If there are no action items or no decisions, return empty arrays.
- Output raw JSON only."#
    }
}
