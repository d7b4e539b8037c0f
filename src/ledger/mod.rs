//! Session ledger
//!
//! The ledger holds the transactions and savings goals for one interactive
//! session. Transactions are append-only; goals are mutated only by the
//! allocation engine when income is recorded. Nothing in here touches disk:
//! the ledger lives and dies with the session, and only the export module
//! ever writes it anywhere.

pub mod allocation;
pub mod summary;

pub use allocation::allocate;
pub use summary::{balance, category_breakdown, total_expenses, total_income, CategoryShare, Summary};

use chrono::Utc;

use crate::error::{SatangError, SatangResult};
use crate::models::{Goal, GoalDraft, GoalId, Transaction, TransactionDraft, TransactionId};

/// In-memory ledger state for one session
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
    next_transaction_id: u64,
    next_goal_id: u64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded transactions, in recording order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All savings goals, in creation order
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Record a transaction
    ///
    /// Assigns the next sequential identifier and appends. If the transaction
    /// is income, the allocation engine runs against the current goals and
    /// its result replaces the goal list.
    pub fn record_transaction(&mut self, draft: TransactionDraft) -> SatangResult<&Transaction> {
        draft
            .validate()
            .map_err(|e| SatangError::Validation(e.to_string()))?;

        self.next_transaction_id += 1;
        let txn = Transaction {
            id: TransactionId::new(self.next_transaction_id),
            category: draft.category,
            amount: draft.amount,
            note: draft.note,
            date: draft.date,
            created_at: Utc::now(),
        };

        if txn.is_income() {
            self.goals = allocate(&self.goals, txn.amount);
        }

        self.transactions.push(txn);
        Ok(self.transactions.last().expect("transaction just pushed"))
    }

    /// Create a savings goal
    ///
    /// Assigns the next sequential identifier; the monthly target is derived
    /// once here and never recomputed.
    pub fn add_goal(&mut self, draft: GoalDraft) -> SatangResult<&Goal> {
        draft
            .validate()
            .map_err(|e| SatangError::Validation(e.to_string()))?;

        self.next_goal_id += 1;
        let goal = Goal::new(
            GoalId::new(self.next_goal_id),
            draft.name,
            draft.target_amount,
            draft.target_months,
        );

        self.goals.push(goal);
        Ok(self.goals.last().expect("goal just pushed"))
    }

    /// The most recent `count` transactions, newest date first
    pub fn recent_transactions(&self, count: usize) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        sorted.truncate(count);
        sorted
    }

    /// Dashboard totals for the current transaction list
    pub fn summary(&self) -> Summary {
        Summary::of(&self.transactions)
    }

    /// Expense breakdown for the current transaction list
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        category_breakdown(&self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_record_assigns_monotonic_ids() {
        let mut ledger = Ledger::new();
        let first = ledger
            .record_transaction(TransactionDraft::new(
                Category::Food,
                Money::from_baht(50),
                date(10),
            ))
            .unwrap()
            .id;
        let second = ledger
            .record_transaction(TransactionDraft::new(
                Category::Transport,
                Money::from_baht(20),
                date(11),
            ))
            .unwrap()
            .id;

        assert!(second > first);
        assert_eq!(ledger.transactions().len(), 2);
    }

    #[test]
    fn test_income_triggers_allocation() {
        let mut ledger = Ledger::new();
        ledger
            .add_goal(GoalDraft::new("Motorcycle", Money::from_baht(1200), 12))
            .unwrap();
        ledger
            .add_goal(GoalDraft::new("Trip", Money::from_baht(600), 6))
            .unwrap();

        ledger
            .record_transaction(TransactionDraft::new(
                Category::Salary,
                Money::from_baht(300),
                date(1),
            ))
            .unwrap();

        assert_eq!(ledger.goals()[0].saved, Money::from_baht(150));
        assert_eq!(ledger.goals()[1].saved, Money::from_baht(150));
    }

    #[test]
    fn test_expense_does_not_touch_goals() {
        let mut ledger = Ledger::new();
        ledger
            .add_goal(GoalDraft::new("Trip", Money::from_baht(600), 6))
            .unwrap();

        ledger
            .record_transaction(TransactionDraft::new(
                Category::Food,
                Money::from_baht(300),
                date(1),
            ))
            .unwrap();

        assert_eq!(ledger.goals()[0].saved, Money::zero());
    }

    #[test]
    fn test_income_with_no_goals() {
        let mut ledger = Ledger::new();
        ledger
            .record_transaction(TransactionDraft::new(
                Category::Salary,
                Money::from_baht(300),
                date(1),
            ))
            .unwrap();

        assert!(ledger.goals().is_empty());
        assert_eq!(ledger.summary().total_income, Money::from_baht(300));
    }

    #[test]
    fn test_invalid_drafts_rejected() {
        let mut ledger = Ledger::new();

        let err = ledger
            .record_transaction(TransactionDraft::new(
                Category::Food,
                Money::from_satang(-1),
                date(1),
            ))
            .unwrap_err();
        assert!(err.is_validation());

        let err = ledger
            .add_goal(GoalDraft::new("", Money::from_baht(100), 12))
            .unwrap_err();
        assert!(err.is_validation());

        assert!(ledger.transactions().is_empty());
        assert!(ledger.goals().is_empty());
    }

    #[test]
    fn test_recent_transactions_sorted_newest_first() {
        let mut ledger = Ledger::new();
        for day in [5, 20, 12] {
            ledger
                .record_transaction(TransactionDraft::new(
                    Category::Food,
                    Money::from_baht(10),
                    date(day),
                ))
                .unwrap();
        }

        let recent = ledger.recent_transactions(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, date(20));
        assert_eq!(recent[1].date, date(12));
    }

    #[test]
    fn test_recent_transactions_ties_break_by_id() {
        let mut ledger = Ledger::new();
        for _ in 0..3 {
            ledger
                .record_transaction(TransactionDraft::new(
                    Category::Food,
                    Money::from_baht(10),
                    date(5),
                ))
                .unwrap();
        }

        let recent = ledger.recent_transactions(3);
        assert!(recent[0].id > recent[1].id);
        assert!(recent[1].id > recent[2].id);
    }

    #[test]
    fn test_summary_and_breakdown_flow() {
        let mut ledger = Ledger::new();
        ledger
            .record_transaction(TransactionDraft::new(
                Category::Salary,
                Money::from_baht(2000),
                date(1),
            ))
            .unwrap();
        ledger
            .record_transaction(TransactionDraft::with_note(
                Category::Food,
                Money::from_baht(300),
                date(2),
                "groceries",
            ))
            .unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.balance, Money::from_baht(1700));

        let breakdown = ledger.breakdown();
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].percentage, 100.0);
    }
}
