//! Append-only per-account stake ledger.
//!
//! A stake is addressed by `(account, index)`, where `index` is its position
//! in that account's sequence. Entries are never removed or reordered; a
//! withdrawal only flips `withdrawn`.

use mbn_common::extend_persistent_ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::ContractError;

const STAKE: Symbol = symbol_short!("STAKE");
const STAKE_COUNT: Symbol = symbol_short!("STK_CNT");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

/// One deposit record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    pub staker: Address,
    pub package: String,
    pub amount: i128,
    pub start_time: u64,
    pub withdrawn: bool,
}

fn stake_key(account: &Address, index: u32) -> (Symbol, Address, u32) {
    (STAKE, account.clone(), index)
}

fn count_key(account: &Address) -> (Symbol, Address) {
    (STAKE_COUNT, account.clone())
}

/// Number of stakes ever created for `account`, withdrawn or not.
pub fn count(env: &Env, account: &Address) -> u32 {
    let key = count_key(account);
    match env.storage().persistent().get::<_, u32>(&key) {
        Some(count) => {
            extend_persistent_ttl(env, &key);
            count
        }
        None => 0,
    }
}

/// Records a new active stake and returns its index.
pub fn append(
    env: &Env,
    account: &Address,
    package: &String,
    amount: i128,
    timestamp: u64,
) -> Result<u32, ContractError> {
    let index = count(env, account);
    let next = index.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;

    let stake = Stake {
        staker: account.clone(),
        package: package.clone(),
        amount,
        start_time: timestamp,
        withdrawn: false,
    };

    let key = stake_key(account, index);
    env.storage().persistent().set(&key, &stake);
    extend_persistent_ttl(env, &key);

    let count_key = count_key(account);
    env.storage().persistent().set(&count_key, &next);
    extend_persistent_ttl(env, &count_key);

    Ok(index)
}

pub fn get(env: &Env, account: &Address, index: u32) -> Result<Stake, ContractError> {
    let key = stake_key(account, index);
    let stake: Stake = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::UndefinedStakeIndex)?;
    extend_persistent_ttl(env, &key);
    Ok(stake)
}

/// Moves a stake to its terminal state. Fails with `AlreadyWithdrawn` if it
/// is already there, so a stake can only ever be settled once.
pub fn mark_withdrawn(env: &Env, account: &Address, index: u32) -> Result<Stake, ContractError> {
    let mut stake = get(env, account, index)?;
    if stake.withdrawn {
        return Err(ContractError::AlreadyWithdrawn);
    }
    stake.withdrawn = true;
    let key = stake_key(account, index);
    env.storage().persistent().set(&key, &stake);
    extend_persistent_ttl(env, &key);
    Ok(stake)
}

// ── Aggregate principal ──────────────────────────────────────────────────────

/// Sum of principal held in active stakes.
pub fn total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

pub fn add_to_total(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let total = total_staked(env)
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().instance().set(&TOTAL_STAKED, &total);
    Ok(total)
}

pub fn sub_from_total(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let total = total_staked(env)
        .checked_sub(amount)
        .filter(|t| *t >= 0)
        .ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().instance().set(&TOTAL_STAKED, &total);
    Ok(total)
}
