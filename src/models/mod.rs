//! Core data models for satang
//!
//! This module contains the data structures that represent the domain:
//! money, transactions, categories, savings goals, and user accounts.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use category::{Category, TransactionKind, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use goal::{Goal, GoalDraft, GoalValidationError, GOAL_ICONS};
pub use ids::{GoalId, TransactionId, UserId};
pub use money::Money;
pub use transaction::{Transaction, TransactionDraft, TransactionValidationError};
pub use user::{User, UserRecord, UserValidationError};
