//! Income-to-goal allocation
//!
//! When an income transaction is recorded, the amount is distributed across
//! the savings goals in proportion to their monthly targets. Each goal's
//! share is capped at its remaining headroom; income allocated past a goal's
//! cap is dropped, not redistributed to the other goals.
//!
//! Shares are computed in integer satang with the largest-remainder method,
//! so the proposed shares always sum to exactly the income amount.

use crate::models::{Goal, Money};

/// Distribute an income amount across goals proportionally to their monthly
/// targets, never decreasing `saved` and never exceeding a goal's target.
///
/// Returns a new goal list; the caller commits it to the ledger. With an
/// empty goal list, or a non-positive total monthly target, the input is
/// returned unchanged.
pub fn allocate(goals: &[Goal], income: Money) -> Vec<Goal> {
    if goals.is_empty() {
        return goals.to_vec();
    }

    let total_monthly: i64 = goals.iter().map(|g| g.monthly_target.satang()).sum();
    if total_monthly <= 0 || !income.is_positive() {
        return goals.to_vec();
    }

    let proposed = proportional_shares(goals, income, total_monthly);

    goals
        .iter()
        .zip(proposed)
        .map(|(goal, share)| {
            let actual = share.min(goal.remaining()).max_zero();
            let mut updated = goal.clone();
            updated.saved = (goal.saved + actual).min(goal.target_amount);
            updated
        })
        .collect()
}

/// Split `income` across goals by `monthly_target / total_monthly`, in
/// integer satang.
///
/// Each share starts at the floored quotient; the satang lost to flooring are
/// handed out one at a time in order of descending division remainder, so
/// the shares sum to exactly `income`.
fn proportional_shares(goals: &[Goal], income: Money, total_monthly: i64) -> Vec<Money> {
    let income = income.satang() as i128;
    let total = total_monthly as i128;

    let mut shares: Vec<i64> = Vec::with_capacity(goals.len());
    let mut remainders: Vec<(usize, i128)> = Vec::with_capacity(goals.len());
    let mut assigned: i128 = 0;

    for (index, goal) in goals.iter().enumerate() {
        let weighted = income * goal.monthly_target.satang() as i128;
        shares.push((weighted / total) as i64);
        remainders.push((index, weighted % total));
        assigned += weighted / total;
    }

    let mut leftover = (income - assigned) as usize;
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (index, _) in remainders {
        if leftover == 0 {
            break;
        }
        shares[index] += 1;
        leftover -= 1;
    }

    shares.into_iter().map(Money::from_satang).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalId;

    fn goal(id: u64, target_baht: i64, months: u32) -> Goal {
        Goal::new(
            GoalId::new(id),
            format!("Goal {}", id),
            Money::from_baht(target_baht),
            months,
        )
    }

    #[test]
    fn test_empty_goals_unchanged() {
        let result = allocate(&[], Money::from_baht(300));
        assert!(result.is_empty());
    }

    #[test]
    fn test_even_split_by_equal_monthly_targets() {
        // 1200 over 12 months and 600 over 6 months both imply 100/month,
        // so 300 of income splits 150/150.
        let goals = vec![goal(1, 1200, 12), goal(2, 600, 6)];
        assert_eq!(goals[0].monthly_target, Money::from_baht(100));
        assert_eq!(goals[1].monthly_target, Money::from_baht(100));

        let result = allocate(&goals, Money::from_baht(300));
        assert_eq!(result[0].saved, Money::from_baht(150));
        assert_eq!(result[1].saved, Money::from_baht(150));
    }

    #[test]
    fn test_allocation_capped_at_target() {
        // A lone goal 50 away from its 1000 target absorbs only 50 of a
        // 100 income; the rest is dropped.
        let mut g = goal(1, 1000, 10);
        g.saved = Money::from_baht(950);

        let result = allocate(&[g], Money::from_baht(100));
        assert_eq!(result[0].saved, Money::from_baht(1000));
        assert!(result[0].is_complete());
    }

    #[test]
    fn test_capped_leftover_not_redistributed() {
        let mut near_full = goal(1, 1000, 10); // 100/month
        near_full.saved = Money::from_baht(990);
        let open = goal(2, 1000, 10); // 100/month

        let result = allocate(&[near_full, open], Money::from_baht(200));
        // Each goal is proposed 100; the first can take only 10 and the
        // overflow does not spill into the second.
        assert_eq!(result[0].saved, Money::from_baht(1000));
        assert_eq!(result[1].saved, Money::from_baht(100));
    }

    #[test]
    fn test_proportional_to_monthly_targets() {
        // 300/month vs 100/month splits income 3:1.
        let goals = vec![goal(1, 3600, 12), goal(2, 1200, 12)];
        let result = allocate(&goals, Money::from_baht(400));
        assert_eq!(result[0].saved, Money::from_baht(300));
        assert_eq!(result[1].saved, Money::from_baht(100));
    }

    #[test]
    fn test_shares_sum_to_income_exactly() {
        // Three equal goals and an income that does not divide evenly:
        // the largest-remainder pass still hands out every satang.
        let goals = vec![goal(1, 1200, 12), goal(2, 1200, 12), goal(3, 1200, 12)];
        let income = Money::from_satang(100);

        let result = allocate(&goals, income);
        let allocated: Money = result
            .iter()
            .zip(&goals)
            .map(|(after, before)| after.saved - before.saved)
            .sum();
        assert_eq!(allocated, income);
    }

    #[test]
    fn test_never_decreases_saved() {
        let mut g1 = goal(1, 1000, 10);
        g1.saved = Money::from_baht(400);
        let mut g2 = goal(2, 500, 5);
        g2.saved = Money::from_baht(500); // already complete

        let before = vec![g1, g2];
        let result = allocate(&before, Money::from_baht(50));
        for (after, before) in result.iter().zip(&before) {
            assert!(after.saved >= before.saved);
            assert!(after.saved <= after.target_amount);
        }
        // The complete goal stays exactly at its target.
        assert_eq!(result[1].saved, Money::from_baht(500));
    }

    #[test]
    fn test_total_allocated_never_exceeds_income() {
        let mut g1 = goal(1, 100, 1);
        g1.saved = Money::from_baht(95);
        let g2 = goal(2, 1000, 10);

        let income = Money::from_baht(300);
        let before = vec![g1, g2];
        let result = allocate(&before, income);
        let allocated: Money = result
            .iter()
            .zip(&before)
            .map(|(after, before)| after.saved - before.saved)
            .sum();
        assert!(allocated <= income);
    }

    #[test]
    fn test_zero_income_is_noop() {
        let goals = vec![goal(1, 1200, 12)];
        let result = allocate(&goals, Money::zero());
        assert_eq!(result[0].saved, Money::zero());
    }

    #[test]
    fn test_degenerate_zero_monthly_total_is_noop() {
        // A goal whose target is smaller than one satang per month floors to
        // a zero monthly target; allocation must not divide by zero.
        let tiny = Goal::new(GoalId::new(1), "Tiny", Money::from_satang(5), 12);
        assert_eq!(tiny.monthly_target, Money::zero());

        let result = allocate(&[tiny], Money::from_baht(100));
        assert_eq!(result[0].saved, Money::zero());
    }
}
