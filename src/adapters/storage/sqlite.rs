/// SQLite storage adapter
///
/// Implements StoragePort for SQLite database operations. Append-only: the
/// pipeline inserts records and never updates or deletes them.
use crate::domain::models::{MeetingMinutes, MeetingRecord, RecordSummary};
use crate::error::{AppError, Result};
use crate::ports::storage::StoragePort;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// SQLite storage implementation
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Create a new SQLite storage with the given database path
    pub fn new(db_path: PathBuf) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        // Enable foreign keys
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run database migrations
    ///
    /// Idempotent; safe to call on every startup.
    pub fn run_migrations(&self) -> Result<()> {
        use rusqlite_migration::{Migrations, M};

        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../../migrations/001_initial.sql"
        ))]);

        let mut conn = self.conn.lock().unwrap();
        migrations
            .to_latest(&mut conn)
            .map_err(|e| AppError::Persistence(rusqlite::Error::ToSqlConversionFailure(Box::new(e))))?;

        Ok(())
    }
}

#[async_trait]
impl StoragePort for SqliteStorage {
    async fn insert_record(&self, minutes: &MeetingMinutes, raw_transcript: &str) -> Result<i64> {
        let payload = serde_json::to_string(minutes).map_err(|e| {
            AppError::Persistence(rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
        })?;
        let created_at = chrono::Utc::now().to_rfc3339();

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO meeting_records (meeting_date, raw_transcript, structured_payload, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![minutes.meeting_date, raw_transcript, payload, created_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn get_record(&self, id: i64) -> Result<Option<MeetingRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, raw_transcript, structured_payload, created_at
             FROM meeting_records WHERE id = ?1",
        )?;

        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            let payload: String = row.get(2)?;
            let minutes: MeetingMinutes = serde_json::from_str(&payload).map_err(|e| {
                AppError::Persistence(rusqlite::Error::FromSqlConversionFailure(
                    2,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                ))
            })?;

            Ok(Some(MeetingRecord {
                id: row.get(0)?,
                minutes,
                raw_transcript: row.get(1)?,
                created_at: row.get(3)?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<RecordSummary>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, meeting_date, created_at
             FROM meeting_records ORDER BY id DESC LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit], |row| {
            Ok(RecordSummary {
                id: row.get(0)?,
                meeting_date: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;

        let mut summaries = Vec::new();
        for summary_result in rows {
            summaries.push(summary_result?);
        }

        Ok(summaries)
    }
}
