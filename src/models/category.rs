//! Transaction kinds and the fixed category sets
//!
//! Categories form a fixed enumerable set per transaction kind. Each category
//! carries display metadata (name, icon, color) used by the UI layer; the
//! color is a hex string so the models stay independent of any rendering
//! crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A transaction category
///
/// The set is fixed: six expense categories and four income categories.
/// The kind is derivable from the category, so a transaction's category
/// alone determines whether it is income or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Expense categories
    Food,
    Transport,
    PersonalItems,
    Utilities,
    Entertainment,
    OtherExpense,
    // Income categories
    Salary,
    Freelance,
    Investment,
    OtherIncome,
}

/// All expense categories, in display order
pub const EXPENSE_CATEGORIES: [Category; 6] = [
    Category::Food,
    Category::Transport,
    Category::PersonalItems,
    Category::Utilities,
    Category::Entertainment,
    Category::OtherExpense,
];

/// All income categories, in display order
pub const INCOME_CATEGORIES: [Category; 4] = [
    Category::Salary,
    Category::Freelance,
    Category::Investment,
    Category::OtherIncome,
];

impl Category {
    /// The kind of transaction this category belongs to
    pub const fn kind(&self) -> TransactionKind {
        match self {
            Self::Food
            | Self::Transport
            | Self::PersonalItems
            | Self::Utilities
            | Self::Entertainment
            | Self::OtherExpense => TransactionKind::Expense,
            Self::Salary | Self::Freelance | Self::Investment | Self::OtherIncome => {
                TransactionKind::Income
            }
        }
    }

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::PersonalItems => "Personal Items",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::OtherExpense => "Other",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::OtherIncome => "Other Income",
        }
    }

    /// Display icon
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍚",
            Self::Transport => "🚃",
            Self::PersonalItems => "🛍",
            Self::Utilities => "💡",
            Self::Entertainment => "🎮",
            Self::OtherExpense => "🔄",
            Self::Salary => "💼",
            Self::Freelance => "💻",
            Self::Investment => "📈",
            Self::OtherIncome => "💰",
        }
    }

    /// Display color as a hex string
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Food => "#FF6B35",
            Self::Transport => "#3B82F6",
            Self::PersonalItems => "#8B5CF6",
            Self::Utilities => "#F59E0B",
            Self::Entertainment => "#10B981",
            Self::OtherExpense => "#6B7280",
            Self::Salary => "#10B981",
            Self::Freelance => "#3B82F6",
            Self::Investment => "#8B5CF6",
            Self::OtherIncome => "#F59E0B",
        }
    }

    /// The categories available for a transaction kind, in display order
    pub const fn for_kind(kind: TransactionKind) -> &'static [Category] {
        match kind {
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
            TransactionKind::Income => &INCOME_CATEGORIES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
