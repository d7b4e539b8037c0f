//! Audit logger for append-only audit log
//!
//! Writes audit entries to a log file as line-delimited JSON (JSONL), one
//! complete JSON object per line, flushed on every write.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{SatangError, SatangResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an audit entry
    ///
    /// Appends the entry as a JSON line and flushes immediately.
    pub fn log(&self, entry: &AuditEntry) -> SatangResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SatangError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| SatangError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| SatangError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| SatangError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file
    ///
    /// Returns entries in chronological order (oldest first).
    pub fn read_all(&self) -> SatangResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| SatangError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                SatangError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                SatangError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> SatangResult<Vec<AuditEntry>> {
        let all_entries = self.read_all()?;
        let skip = all_entries.len().saturating_sub(count);
        Ok(all_entries.into_iter().skip(skip).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use tempfile::TempDir;

    fn create_test_logger() -> (TempDir, AuditLogger) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (temp_dir, logger)
    }

    #[test]
    fn test_log_and_read() {
        let (_temp_dir, logger) = create_test_logger();

        logger
            .log(&AuditEntry::new(
                Operation::Create,
                EntityType::Goal,
                "goal-1",
                None,
            ))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, "goal-1");
    }

    #[test]
    fn test_read_empty_log() {
        let (_temp_dir, logger) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_entries_append_in_order() {
        let (_temp_dir, logger) = create_test_logger();

        for i in 1..=3 {
            logger
                .log(&AuditEntry::new(
                    Operation::Create,
                    EntityType::Transaction,
                    format!("txn-{}", i),
                    None,
                ))
                .unwrap();
        }

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].entity_id, "txn-1");
        assert_eq!(entries[2].entity_id, "txn-3");
    }

    #[test]
    fn test_read_recent() {
        let (_temp_dir, logger) = create_test_logger();

        for i in 1..=5 {
            logger
                .log(&AuditEntry::new(
                    Operation::Create,
                    EntityType::Transaction,
                    format!("txn-{}", i),
                    None,
                ))
                .unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_id, "txn-4");
        assert_eq!(recent[1].entity_id, "txn-5");
    }
}
