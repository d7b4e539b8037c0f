//! Export module for satang
//!
//! Writes one-way snapshots of the session ledger:
//! - CSV: transactions and goals as spreadsheet-compatible files
//! - JSON: a full machine-readable session snapshot
//!
//! Exports are never read back; they are not a persistence mechanism.

pub mod csv;
pub mod json;

pub use csv::{export_goals_csv, export_transactions_csv};
pub use json::{export_session_json, SessionSnapshot, EXPORT_SCHEMA_VERSION};

use std::fs::File;
use std::path::PathBuf;

use chrono::Local;

use crate::config::paths::SatangPaths;
use crate::error::{SatangError, SatangResult};
use crate::models::{Goal, Transaction};

/// Write a timestamped CSV + JSON export of the session into the export
/// directory, returning the paths written.
pub fn export_session(
    paths: &SatangPaths,
    transactions: &[Transaction],
    goals: &[Goal],
) -> SatangResult<Vec<PathBuf>> {
    paths.ensure_directories()?;

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let mut written = Vec::new();

    let txn_path = paths.export_dir().join(format!("transactions-{}.csv", stamp));
    let file = File::create(&txn_path).map_err(|e| SatangError::Export(e.to_string()))?;
    export_transactions_csv(transactions, file)?;
    written.push(txn_path);

    let goals_path = paths.export_dir().join(format!("goals-{}.csv", stamp));
    let file = File::create(&goals_path).map_err(|e| SatangError::Export(e.to_string()))?;
    export_goals_csv(goals, file)?;
    written.push(goals_path);

    let json_path = paths.export_dir().join(format!("session-{}.json", stamp));
    let file = File::create(&json_path).map_err(|e| SatangError::Export(e.to_string()))?;
    export_session_json(transactions, goals, file)?;
    written.push(json_path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_session_writes_three_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SatangPaths::with_base_dir(temp_dir.path().to_path_buf());

        let written = export_session(&paths, &[], &[]).unwrap();
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists());
        }
        assert!(written[0].to_string_lossy().contains("transactions-"));
        assert!(written[2].to_string_lossy().ends_with(".json"));
    }
}
