//! Transaction model
//!
//! Transactions are immutable once recorded: the ledger only ever appends
//! them, never edits them. The kind (income/expense) is derived from the
//! category, so the two can never disagree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, TransactionKind};
use super::ids::TransactionId;
use super::money::Money;

/// A recorded transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned sequentially by the ledger
    pub id: TransactionId,

    /// Category (also determines the kind)
    pub category: Category,

    /// Amount as a non-negative magnitude; the kind gives it its sign
    pub amount: Money,

    /// Optional free-text note
    #[serde(default)]
    pub note: String,

    /// Transaction date
    pub date: NaiveDate,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// The kind of this transaction, derived from its category
    pub const fn kind(&self) -> TransactionKind {
        self.category.kind()
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind() == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    /// The amount with its sign applied (income positive, expense negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind() {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind() {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.category.name(),
            sign,
            self.amount
        )
    }
}

/// Input for recording a new transaction
///
/// The ledger assigns the identifier and creation timestamp when the draft
/// is committed.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub category: Category,
    pub amount: Money,
    pub note: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Create a draft with an empty note
    pub fn new(category: Category, amount: Money, date: NaiveDate) -> Self {
        Self {
            category,
            amount,
            note: String::new(),
            date,
        }
    }

    /// Create a draft with a note
    pub fn with_note(
        category: Category,
        amount: Money,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Self {
        Self {
            category,
            amount,
            note: note.into(),
            date,
        }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

/// Validation errors for transaction drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
