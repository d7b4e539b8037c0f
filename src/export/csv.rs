//! CSV export functionality
//!
//! Exports the session's transactions and goals to spreadsheet-compatible
//! CSV.

use std::io::Write;

use crate::error::{SatangError, SatangResult};
use crate::models::{Goal, Transaction};

/// Export transactions to CSV, one row per transaction
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> SatangResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Kind", "Category", "Amount", "Note"])
        .map_err(|e| SatangError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind().to_string(),
                txn.category.name().to_string(),
                format!("{:.2}", txn.amount.satang() as f64 / 100.0),
                txn.note.clone(),
            ])
            .map_err(|e| SatangError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SatangError::Export(e.to_string()))?;

    Ok(())
}

/// Export goals to CSV, one row per goal
pub fn export_goals_csv<W: Write>(goals: &[Goal], writer: W) -> SatangResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Name",
            "Target Amount",
            "Target Months",
            "Monthly Target",
            "Saved",
        ])
        .map_err(|e| SatangError::Export(e.to_string()))?;

    for goal in goals {
        csv_writer
            .write_record([
                goal.id.to_string(),
                goal.name.clone(),
                format!("{:.2}", goal.target_amount.satang() as f64 / 100.0),
                goal.target_months.to_string(),
                format!("{:.2}", goal.monthly_target.satang() as f64 / 100.0),
                format!("{:.2}", goal.saved.satang() as f64 / 100.0),
            ])
            .map_err(|e| SatangError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SatangError::Export(e.to_string()))?;

    Ok(())
}
