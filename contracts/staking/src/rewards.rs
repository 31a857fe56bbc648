//! Reward accrual.
//!
//! Reward is a step function of elapsed time: nothing before the package's
//! lock boundary, then `rate_bps` of principal for each completed
//! `reward_period`, counting at most `max_periods` steps.
//!
//! ```text
//! periods = min(elapsed / reward_period, max_periods)
//! reward  = amount * rate_bps * periods / 10_000
//! ```
//!
//! The result depends only on `(amount, elapsed, package)` and floors toward
//! zero.

use crate::{packages::Package, ContractError};

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Completed reward steps after `elapsed` seconds, capped at `max_periods`.
/// Zero until the lock has elapsed.
pub fn completed_periods(package: &Package, elapsed: u64) -> u32 {
    if elapsed < package.lock_duration || package.reward_period == 0 {
        return 0;
    }
    let steps = elapsed / package.reward_period;
    if steps >= u64::from(package.max_periods) {
        package.max_periods
    } else {
        // Bounded by max_periods above, so the narrowing is lossless.
        steps as u32
    }
}

/// Reward owed on `amount` principal after `elapsed` seconds.
pub fn accrued(amount: i128, package: &Package, elapsed: u64) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Ok(0);
    }
    let periods = completed_periods(package, elapsed);
    if periods == 0 {
        return Ok(0);
    }
    amount
        .checked_mul(i128::from(package.rate_bps))
        .and_then(|v| v.checked_mul(i128::from(periods)))
        .map(|v| v / BPS_DENOMINATOR)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Largest reward `amount` can ever earn under `package`.
pub fn cap(amount: i128, package: &Package) -> Result<i128, ContractError> {
    accrued(amount, package, u64::MAX)
}
