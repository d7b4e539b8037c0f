//! TUI modal dialogs

pub mod goal;
pub mod transaction;

pub use goal::{GoalField, GoalFormState};
pub use transaction::{TransactionField, TransactionFormState};
