//! Pipeline orchestrator
//!
//! Sequences one invocation: read transcript, extract minutes, persist the
//! record, notify the channel. Extraction and persistence failures are
//! fatal; notification failures are logged and swallowed because the record
//! is already durable by then. Exactly one record per invocation.

use crate::domain::models::MeetingMinutes;
use crate::error::{AppError, Result};
use crate::ports::{ExtractionPort, NotifierPort, StoragePort};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

/// The transcript-to-minutes pipeline
pub struct Pipeline {
    storage: Arc<dyn StoragePort>,
    extractor: Arc<dyn ExtractionPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl Pipeline {
    /// Create a pipeline from explicitly constructed ports
    pub fn new(
        storage: Arc<dyn StoragePort>,
        extractor: Arc<dyn ExtractionPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            storage,
            extractor,
            notifier,
        }
    }

    /// Process one transcript file.
    ///
    /// The meeting title is derived from the file stem. Returns the assigned
    /// record id and the extracted minutes.
    pub async fn process_file(&self, path: &Path) -> Result<(i64, MeetingMinutes)> {
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Meeting")
            .to_string();

        let transcript = read_transcript(path)?;
        log::info!(
            "Read transcript '{}' ({} chars)",
            path.display(),
            transcript.len()
        );

        self.process_transcript(&title, &transcript).await
    }

    /// Process one transcript string through extract, persist and notify.
    pub async fn process_transcript(
        &self,
        title: &str,
        transcript: &str,
    ) -> Result<(i64, MeetingMinutes)> {
        let minutes = self.extractor.extract_minutes(transcript).await?;
        let id = self.storage.insert_record(&minutes, transcript).await?;
        log::info!("Stored meeting record {}", id);

        match self.notifier.send_minutes(title, &minutes).await {
            Ok(()) => {}
            Err(err) if err.is_notification() => {
                log::warn!("Notification failed (record {} already stored): {}", id, err);
            }
            Err(err) => return Err(err),
        }

        Ok((id, minutes))
    }
}

/// Read a transcript file into a string.
///
/// A missing file and any other read failure are distinguished so the
/// operator report can name the right cause.
pub fn read_transcript(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::InputNotFound(path.display().to_string()),
        _ => AppError::InputRead(format!("{}: {}", path.display(), e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ActionItem;
    use crate::ports::mocks::{FailingExtractor, MockExtractor, MockNotifier, MockStorage};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn scenario_minutes() -> MeetingMinutes {
        MeetingMinutes {
            meeting_date: Some("2025-11-29".to_string()),
            participants: vec!["Arun".to_string()],
            action_items: vec![ActionItem {
                task: "TAC uptake".to_string(),
                owner: Some("Arun".to_string()),
                due_date: Some("Friday".to_string()),
            }],
            decisions: vec![],
        }
    }

    fn transcript_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_happy_path_stores_and_notifies() {
        let storage = MockStorage::new();
        let notifier = MockNotifier::new();
        let pipeline = Pipeline::new(
            Arc::new(storage.clone()),
            Arc::new(MockExtractor::returning(scenario_minutes())),
            Arc::new(notifier.clone()),
        );

        let file = transcript_file("Arun: I'll handle the TAC uptake by Friday.");
        let (id, minutes) = pipeline.process_file(file.path()).await.unwrap();

        assert_eq!(minutes, scenario_minutes());
        assert_eq!(storage.record_count(), 1);
        assert_eq!(notifier.sent_count(), 1);

        // Read-back must round-trip the structured fields exactly.
        let record = pipeline.storage.get_record(id).await.unwrap().unwrap();
        assert_eq!(record.minutes, scenario_minutes());
        assert_eq!(
            record.raw_transcript,
            "Arun: I'll handle the TAC uptake by Friday."
        );
    }

    #[tokio::test]
    async fn test_notifier_failure_is_not_fatal() {
        let storage = MockStorage::new();
        let pipeline = Pipeline::new(
            Arc::new(storage.clone()),
            Arc::new(MockExtractor::returning(scenario_minutes())),
            Arc::new(MockNotifier::failing()),
        );

        let file = transcript_file("Arun: I'll handle the TAC uptake by Friday.");
        let (id, _) = pipeline.process_file(file.path()).await.unwrap();

        // The record is still stored and queryable.
        assert!(pipeline.storage.get_record(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_input_writes_nothing() {
        let storage = MockStorage::new();
        let pipeline = Pipeline::new(
            Arc::new(storage.clone()),
            Arc::new(MockExtractor::returning(scenario_minutes())),
            Arc::new(MockNotifier::new()),
        );

        let err = pipeline
            .process_file(Path::new("/nonexistent/standup.txt"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InputNotFound(_)));
        assert_eq!(storage.record_count(), 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_writes_nothing() {
        let storage = MockStorage::new();
        let notifier = MockNotifier::new();
        let pipeline = Pipeline::new(
            Arc::new(storage.clone()),
            Arc::new(FailingExtractor),
            Arc::new(notifier.clone()),
        );

        let file = transcript_file("inaudible mumbling");
        let err = pipeline.process_file(file.path()).await.unwrap_err();

        assert!(matches!(err, AppError::ExtractionFormat(_)));
        assert_eq!(storage.record_count(), 0);
        assert_eq!(notifier.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_title_derived_from_file_stem() {
        let notifier = MockNotifier::new();
        let pipeline = Pipeline::new(
            Arc::new(MockStorage::new()),
            Arc::new(MockExtractor::returning(scenario_minutes())),
            Arc::new(notifier.clone()),
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weekly_sync.txt");
        std::fs::write(&path, "Arun: nothing to report.").unwrap();

        pipeline.process_file(&path).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent[0].0, "weekly_sync");
    }

    #[test]
    fn test_read_transcript_distinguishes_not_found() {
        let err = read_transcript(Path::new("/nonexistent/standup.txt")).unwrap_err();
        assert!(matches!(err, AppError::InputNotFound(_)));

        let file = transcript_file("hello");
        assert_eq!(read_transcript(file.path()).unwrap(), "hello");
    }
}
