//! Savings goal model
//!
//! A goal tracks a target amount to be saved over a number of months. The
//! monthly target is computed once at creation and stored; it is the weight
//! used when allocating income across goals. The `saved` field is the only
//! field that changes after creation, and only ever upward, capped at the
//! target amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Icons cycled through by goal id for display
pub const GOAL_ICONS: [&str; 6] = ["🛵", "✈️", "🏠", "💎", "🎓", "💻"];

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, assigned sequentially by the ledger
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Total amount to save
    pub target_amount: Money,

    /// Duration to save it over, in months
    pub target_months: u32,

    /// Amount to save per month; fixed at creation as
    /// `target_amount / target_months`
    pub monthly_target: Money,

    /// Cumulative amount saved so far; never decreases, never exceeds
    /// `target_amount`
    pub saved: Money,

    /// When the goal was created
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    ///
    /// The monthly target is derived here, once, and never recomputed.
    pub fn new(
        id: GoalId,
        name: impl Into<String>,
        target_amount: Money,
        target_months: u32,
    ) -> Self {
        let monthly_target = if target_months == 0 {
            Money::zero()
        } else {
            Money::from_satang(target_amount.satang() / target_months as i64)
        };

        Self {
            id,
            name: name.into(),
            target_amount,
            target_months,
            monthly_target,
            saved: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        (self.target_amount - self.saved).max_zero()
    }

    /// Check if the goal has been fully funded
    pub fn is_complete(&self) -> bool {
        self.saved >= self.target_amount
    }

    /// Progress toward the target as a fraction in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.target_amount.satang() <= 0 {
            return 0.0;
        }
        (self.saved.satang() as f64 / self.target_amount.satang() as f64).clamp(0.0, 1.0)
    }

    /// Display icon, selected by id from the fixed icon set
    pub fn icon(&self) -> &'static str {
        GOAL_ICONS[(self.id.value() % GOAL_ICONS.len() as u64) as usize]
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} / {}", self.name, self.saved, self.target_amount)
    }
}

/// Input for creating a new goal
///
/// The ledger assigns the identifier and derives the monthly target when the
/// draft is committed.
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: Money,
    pub target_months: u32,
}

impl GoalDraft {
    /// Create a new goal draft
    pub fn new(name: impl Into<String>, target_amount: Money, target_months: u32) -> Self {
        Self {
            name: name.into(),
            target_amount,
            target_months,
        }
    }

    /// The monthly saving this draft implies, shown as a form preview
    pub fn monthly_target(&self) -> Money {
        if self.target_months == 0 {
            return Money::zero();
        }
        Money::from_satang(self.target_amount.satang() / self.target_months as i64)
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        if self.target_months == 0 {
            return Err(GoalValidationError::ZeroMonths);
        }
        Ok(())
    }
}

/// Validation errors for goal drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    ZeroMonths,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive: {}", amount)
            }
            Self::ZeroMonths => write!(f, "Goal duration must be at least one month"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
