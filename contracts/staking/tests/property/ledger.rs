#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for deposits and stake addressing.
//!
//! Invariants tested:
//! - `stake_tokens` with a non-positive amount always fails with `InvalidAmount`
//! - `stake_tokens` with an unregistered name always fails with `UnknownPackage`
//! - Successive stake indices for one account are 0, 1, 2, …
//! - Indices at or past `stake_count` are undefined for both exits
//! - `check_reward` is zero before the lock for every package

use mbn_staking::{packages::DAY, ContractError};
use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, String,
};

use crate::common::{
    advance_days, funded_account, package, setup_test_env, GOLD, PLATINUM, SILVER,
};

const PACKAGES: [&str; 3] = [SILVER, GOLD, PLATINUM];
const LOCK_DAYS: [u64; 3] = [30, 60, 90];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_non_positive_amount_is_invalid(
        amount in i128::MIN..=0i128,
        which in 0usize..3,
    ) {
        let ctx = setup_test_env();
        let staker = funded_account(&ctx, 1_000);

        let result = ctx.client.try_stake_tokens(&staker, &amount, &package(&ctx, PACKAGES[which]));
        match result {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::InvalidAmount),
            _ => prop_assert!(false, "Expected InvalidAmount error"),
        }
        prop_assert_eq!(ctx.client.stake_count(&staker), 0);
    }

    #[test]
    fn prop_unknown_package_is_rejected(name in "[A-Za-z ]{1,32}") {
        prop_assume!(!PACKAGES.contains(&name.as_str()));

        let ctx = setup_test_env();
        let staker = funded_account(&ctx, 1_000);

        let result = ctx.client.try_stake_tokens(&staker, &100, &String::from_str(&ctx.env, &name));
        match result {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::UnknownPackage),
            _ => prop_assert!(false, "Expected UnknownPackage error"),
        }
    }

    #[test]
    fn prop_stake_indices_strictly_increase(picks in prop::collection::vec(0usize..3, 1..8)) {
        let ctx = setup_test_env();
        let staker = funded_account(&ctx, 10_000);
        let other = funded_account(&ctx, 10_000);

        for (expected, which) in picks.iter().enumerate() {
            let index = ctx.client.stake_tokens(&staker, &10, &package(&ctx, PACKAGES[*which]));
            prop_assert_eq!(index, expected as u32);
            // Another account's deposits never shift this account's sequence.
            ctx.client.stake_tokens(&other, &10, &package(&ctx, SILVER));
        }
        prop_assert_eq!(ctx.client.stake_count(&staker), picks.len() as u32);
    }

    #[test]
    fn prop_index_past_count_is_undefined(staked in 0u32..4, past in 0u32..1_000) {
        let ctx = setup_test_env();
        let staker = funded_account(&ctx, 1_000);
        for _ in 0..staked {
            ctx.client.stake_tokens(&staker, &10, &package(&ctx, SILVER));
        }
        advance_days(&ctx, 365);

        let index = staked + past;
        match ctx.client.try_unstake(&staker, &index) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::UndefinedStakeIndex),
            _ => prop_assert!(false, "Expected UndefinedStakeIndex error"),
        }
        match ctx.client.try_force_unstake(&staker, &index) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::UndefinedStakeIndex),
            _ => prop_assert!(false, "Expected UndefinedStakeIndex error"),
        }
        match ctx.client.try_check_reward(&Address::generate(&ctx.env), &0) {
            Err(Ok(e)) => prop_assert_eq!(e, ContractError::UndefinedStakeIndex),
            _ => prop_assert!(false, "Expected UndefinedStakeIndex error"),
        }
    }

    #[test]
    fn prop_check_reward_zero_before_lock(
        which in 0usize..3,
        amount in 1i128..=1_000_000_000i128,
        seconds_early in 1u64..=30 * DAY,
    ) {
        let ctx = setup_test_env();
        let staker = funded_account(&ctx, amount);
        ctx.client.stake_tokens(&staker, &amount, &package(&ctx, PACKAGES[which]));

        let lock = LOCK_DAYS[which] * DAY;
        ctx.env.ledger().set_timestamp(lock - seconds_early);
        prop_assert_eq!(ctx.client.check_reward(&staker, &0), 0);
    }
}
