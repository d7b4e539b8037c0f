//! JSON export functionality
//!
//! Exports a complete snapshot of the session ledger with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SatangError, SatangResult};
use crate::ledger::Summary;
use crate::models::{Goal, Money, Transaction};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full session snapshot structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// All transactions recorded this session
    pub transactions: Vec<Transaction>,

    /// All savings goals
    pub goals: Vec<Goal>,

    /// Aggregate totals at export time
    pub totals: SnapshotTotals,
}

/// Aggregate totals included with a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotTotals {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
}

impl SessionSnapshot {
    /// Build a snapshot from the current session state
    pub fn new(transactions: &[Transaction], goals: &[Goal]) -> Self {
        let summary = Summary::of(transactions);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            transactions: transactions.to_vec(),
            goals: goals.to_vec(),
            totals: SnapshotTotals {
                total_income: summary.total_income,
                total_expenses: summary.total_expenses,
                balance: summary.balance,
            },
        }
    }
}

/// Export a full session snapshot as pretty-printed JSON
pub fn export_session_json<W: Write>(
    transactions: &[Transaction],
    goals: &[Goal],
    writer: W,
) -> SatangResult<()> {
    let snapshot = SessionSnapshot::new(transactions, goals);
    serde_json::to_writer_pretty(writer, &snapshot)
        .map_err(|e| SatangError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, GoalId, TransactionId};
    use chrono::NaiveDate;

    fn test_transaction(id: u64, category: Category, baht: i64) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            category,
            amount: Money::from_baht(baht),
            note: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_snapshot_totals() {
        let txns = vec![
            test_transaction(1, Category::Salary, 2000),
            test_transaction(2, Category::Food, 300),
        ];
        let goals = vec![Goal::new(GoalId::new(1), "Trip", Money::from_baht(600), 6)];

        let snapshot = SessionSnapshot::new(&txns, &goals);
        assert_eq!(snapshot.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(snapshot.totals.total_income, Money::from_baht(2000));
        assert_eq!(snapshot.totals.total_expenses, Money::from_baht(300));
        assert_eq!(snapshot.totals.balance, Money::from_baht(1700));
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.goals.len(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let txns = vec![test_transaction(1, Category::Salary, 2000)];
        let goals = vec![Goal::new(GoalId::new(1), "Trip", Money::from_baht(600), 6)];

        let mut buf = Vec::new();
        export_session_json(&txns, &goals, &mut buf).unwrap();

        let parsed: SessionSnapshot = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.transactions[0].id, TransactionId::new(1));
        assert_eq!(parsed.goals[0].name, "Trip");
        assert_eq!(parsed.totals.balance, Money::from_baht(2000));
    }
}
