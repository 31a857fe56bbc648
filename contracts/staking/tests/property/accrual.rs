#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the reward curve.
//!
//! Invariants tested:
//! - Reward is exactly zero while elapsed time is below the lock duration
//! - Reward never decreases as elapsed time grows
//! - Reward never exceeds the package cap
//! - Reward is a pure function of its inputs

use mbn_staking::{
    packages::DAY,
    rewards::{accrued, cap},
    Package,
};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────────

prop_compose! {
    fn arb_package()(
        lock_days in 1u64..=365,
        period_days in 1u64..=365,
        rate_bps in 0u32..=10_000,
        max_periods in 1u32..=48,
    ) -> Package {
        Package {
            lock_duration: lock_days * DAY,
            reward_period: period_days * DAY,
            rate_bps,
            max_periods,
        }
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// Before the lock boundary no reward is owed, whatever the terms.
    #[test]
    fn prop_zero_before_lock(
        package in arb_package(),
        amount in 1i128..=1_000_000_000_000i128,
        fraction in 0u64..1_000,
    ) {
        let elapsed = package.lock_duration * fraction / 1_000;
        prop_assert!(elapsed < package.lock_duration);
        prop_assert_eq!(accrued(amount, &package, elapsed).unwrap(), 0);
    }

    /// Waiting longer never lowers the reward.
    #[test]
    fn prop_monotonic_in_elapsed_time(
        package in arb_package(),
        amount in 1i128..=1_000_000_000_000i128,
        t1 in 0u64..=2_000 * DAY,
        dt in 0u64..=2_000 * DAY,
    ) {
        let earlier = accrued(amount, &package, t1).unwrap();
        let later = accrued(amount, &package, t1 + dt).unwrap();
        prop_assert!(later >= earlier);
        prop_assert!(earlier >= 0);
    }

    /// Reward is bounded by the package cap no matter how long the stake ages.
    #[test]
    fn prop_bounded_by_cap(
        package in arb_package(),
        amount in 1i128..=1_000_000_000_000i128,
        elapsed in any::<u64>(),
    ) {
        let reward = accrued(amount, &package, elapsed).unwrap();
        let ceiling = cap(amount, &package).unwrap();
        prop_assert!(reward <= ceiling);
        prop_assert!(ceiling <= amount * i128::from(package.rate_bps) * i128::from(package.max_periods) / 10_000);
    }

    /// Same inputs, same answer.
    #[test]
    fn prop_deterministic(
        package in arb_package(),
        amount in 1i128..=1_000_000_000i128,
        elapsed in 0u64..=3_000 * DAY,
    ) {
        prop_assert_eq!(
            accrued(amount, &package, elapsed),
            accrued(amount, &package, elapsed)
        );
    }
}
