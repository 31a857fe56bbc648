//! Reward pool bookkeeping.
//!
//! The pool is a scalar tracked separately from staked principal even though
//! both sit in the contract's token balance. It never goes negative.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::ContractError;

const REWARD_POOL: Symbol = symbol_short!("RWD_POOL");

pub fn balance(env: &Env) -> i128 {
    env.storage().instance().get(&REWARD_POOL).unwrap_or(0)
}

pub fn credit(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let next = balance(env)
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().instance().set(&REWARD_POOL, &next);
    Ok(next)
}

/// Takes `amount` out of the pool in full, or not at all.
pub fn debit(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let current = balance(env);
    if amount > current {
        return Err(ContractError::InsufficientRewardPool);
    }
    let next = current - amount;
    env.storage().instance().set(&REWARD_POOL, &next);
    Ok(next)
}
