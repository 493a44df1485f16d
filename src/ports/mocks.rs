//! Mock implementations for testing

use crate::domain::models::{MeetingMinutes, MeetingRecord, RecordSummary};
use crate::error::{AppError, Result};
use crate::ports::llm::ExtractionPort;
use crate::ports::notify::NotifierPort;
use crate::ports::storage::StoragePort;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock storage implementation for testing
#[derive(Clone, Default)]
pub struct MockStorage {
    records: Arc<Mutex<Vec<MeetingRecord>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl StoragePort for MockStorage {
    async fn insert_record(&self, minutes: &MeetingMinutes, raw_transcript: &str) -> Result<i64> {
        let id = self.next_id();
        self.records.lock().unwrap().push(MeetingRecord {
            id,
            minutes: minutes.clone(),
            raw_transcript: raw_transcript.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(id)
    }

    async fn get_record(&self, id: i64) -> Result<Option<MeetingRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<RecordSummary>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .rev()
            .take(limit as usize)
            .map(|r| RecordSummary {
                id: r.id,
                meeting_date: r.minutes.meeting_date.clone(),
                created_at: r.created_at.clone(),
            })
            .collect())
    }
}

/// Mock extractor returning a canned result
pub struct MockExtractor {
    minutes: MeetingMinutes,
}

impl MockExtractor {
    pub fn returning(minutes: MeetingMinutes) -> Self {
        Self { minutes }
    }
}

#[async_trait]
impl ExtractionPort for MockExtractor {
    async fn extract_minutes(&self, _transcript: &str) -> Result<MeetingMinutes> {
        Ok(self.minutes.clone())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Mock extractor that always fails with a schema-mismatch error
pub struct FailingExtractor;

#[async_trait]
impl ExtractionPort for FailingExtractor {
    async fn extract_minutes(&self, _transcript: &str) -> Result<MeetingMinutes> {
        Err(AppError::ExtractionFormat(
            "missing field `participants`".to_string(),
        ))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Mock notifier recording sent messages, optionally failing
#[derive(Clone, Default)]
pub struct MockNotifier {
    pub sent: Arc<Mutex<Vec<(String, MeetingMinutes)>>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotifierPort for MockNotifier {
    async fn send_minutes(&self, title: &str, minutes: &MeetingMinutes) -> Result<()> {
        if self.fail {
            return Err(AppError::NotificationNetwork(
                "simulated connection reset".to_string(),
            ));
        }
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), minutes.clone()));
        Ok(())
    }
}
