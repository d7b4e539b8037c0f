//! Ledger aggregation
//!
//! Pure reducers over the transaction list: income/expense totals, balance,
//! and the per-category expense breakdown behind the spending chart. All of
//! them are recomputed from the transaction list on every call; there is no
//! caching to invalidate.

use std::collections::HashMap;

use crate::models::{Category, Money, Transaction};

/// Total of all income transactions
pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Total of all expense transactions
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses; may be negative
pub fn balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}

/// The three dashboard totals in one pass-friendly bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
}

impl Summary {
    /// Compute the summary for a transaction list
    pub fn of(transactions: &[Transaction]) -> Self {
        let income = total_income(transactions);
        let expenses = total_expenses(transactions);
        Self {
            total_income: income,
            total_expenses: expenses,
            balance: income - expenses,
        }
    }
}

/// One expense category's slice of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// The expense category
    pub category: Category,
    /// Total spent in this category
    pub total: Money,
    /// Share of total expenses, as a percentage rounded to one decimal
    pub percentage: f64,
}

/// Group expense transactions by category and compute each category's share
/// of total spending.
///
/// Returns an empty vector when there are no expense transactions (the UI
/// renders an empty-state message). Shares are sorted largest first.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut totals: HashMap<Category, Money> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(txn.category).or_insert(Money::zero()) += txn.amount;
    }

    let grand_total: Money = totals.values().copied().sum();
    if !grand_total.is_positive() {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, total)| {
            let raw = total.satang() as f64 / grand_total.satang() as f64 * 100.0;
            CategoryShare {
                category,
                total,
                percentage: (raw * 10.0).round() / 10.0,
            }
        })
        .collect();

    shares.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.name().cmp(b.category.name())));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionId};
    use chrono::{NaiveDate, Utc};

    fn transaction(id: u64, category: Category, baht: i64) -> Transaction {
        let draft = TransactionDraft::new(
            category,
            Money::from_baht(baht),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        Transaction {
            id: TransactionId::new(id),
            category: draft.category,
            amount: draft.amount,
            note: draft.note,
            date: draft.date,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_and_balance() {
        let txns = vec![
            transaction(1, Category::Salary, 2000),
            transaction(2, Category::Freelance, 500),
            transaction(3, Category::Food, 300),
            transaction(4, Category::Transport, 200),
        ];

        assert_eq!(total_income(&txns), Money::from_baht(2500));
        assert_eq!(total_expenses(&txns), Money::from_baht(500));
        assert_eq!(balance(&txns), Money::from_baht(2000));
    }

    #[test]
    fn test_balance_identity() {
        let txns = vec![
            transaction(1, Category::Salary, 100),
            transaction(2, Category::Food, 300),
        ];
        assert_eq!(balance(&txns), total_income(&txns) - total_expenses(&txns));
        assert_eq!(balance(&txns), Money::from_baht(-200));
    }

    #[test]
    fn test_empty_list() {
        let summary = Summary::of(&[]);
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.balance, Money::zero());
    }

    #[test]
    fn test_breakdown_empty_without_expenses() {
        assert!(category_breakdown(&[]).is_empty());

        let income_only = vec![transaction(1, Category::Salary, 2000)];
        assert!(category_breakdown(&income_only).is_empty());
    }

    #[test]
    fn test_breakdown_groups_and_sorts() {
        let txns = vec![
            transaction(1, Category::Food, 100),
            transaction(2, Category::Food, 200),
            transaction(3, Category::Transport, 100),
            transaction(4, Category::Salary, 5000), // ignored
        ];

        let breakdown = category_breakdown(&txns);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, Category::Food);
        assert_eq!(breakdown[0].total, Money::from_baht(300));
        assert_eq!(breakdown[0].percentage, 75.0);
        assert_eq!(breakdown[1].category, Category::Transport);
        assert_eq!(breakdown[1].percentage, 25.0);
    }

    #[test]
    fn test_breakdown_percentages_rounded_to_one_decimal() {
        let txns = vec![
            transaction(1, Category::Food, 1),
            transaction(2, Category::Transport, 2),
        ];

        let breakdown = category_breakdown(&txns);
        assert_eq!(breakdown[0].percentage, 66.7);
        assert_eq!(breakdown[1].percentage, 33.3);
    }

    #[test]
    fn test_breakdown_percentages_sum_near_100() {
        let txns = vec![
            transaction(1, Category::Food, 7),
            transaction(2, Category::Transport, 11),
            transaction(3, Category::Utilities, 13),
            transaction(4, Category::Entertainment, 3),
        ];

        let total: f64 = category_breakdown(&txns).iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 0.2);
    }
}
