#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub package_count: u32,
    pub timestamp: u64,
}

/// Fired when an account opens a new stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeAddedEvent {
    pub staker: Address,
    pub package: String,
    pub amount: i128,
    pub stake_index: u32,
    pub timestamp: u64,
}

/// Fired on a normal withdrawal of principal plus reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub stake_index: u32,
    pub principal: i128,
    pub reward: i128,
    pub timestamp: u64,
}

/// Fired on a principal-only withdrawal that bypasses the reward pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForcedUnstakeEvent {
    pub staker: Address,
    pub stake_index: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAddedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRemovedEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

/// Fired when the contract logic is swapped in place.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradedEvent {
    pub new_wasm_hash: BytesN<32>,
    pub schema_version: u32,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, token: Address, package_count: u32) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            token,
            package_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_added(
    env: &Env,
    staker: Address,
    package: String,
    amount: i128,
    stake_index: u32,
) {
    env.events().publish(
        (symbol_short!("STK_ADD"), staker.clone()),
        StakeAddedEvent {
            staker,
            package,
            amount,
            stake_index,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, staker: Address, stake_index: u32, principal: i128, reward: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            stake_index,
            principal,
            reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_forced_unstake(env: &Env, staker: Address, stake_index: u32) {
    env.events().publish(
        (symbol_short!("FORCED"), staker.clone()),
        ForcedUnstakeEvent {
            staker,
            stake_index,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_added(env: &Env, contributor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_ADD"), contributor.clone()),
        RewardAddedEvent {
            contributor,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_removed(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_REM"), owner.clone()),
        RewardRemovedEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env) {
    env.events()
        .publish((symbol_short!("PAUSED"),), env.ledger().timestamp());
}

pub fn publish_unpaused(env: &Env) {
    env.events()
        .publish((symbol_short!("UNPAUSED"),), env.ledger().timestamp());
}

pub fn publish_owner_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_upgraded(env: &Env, new_wasm_hash: BytesN<32>, schema_version: u32) {
    env.events().publish(
        (symbol_short!("UPGRADED"),),
        UpgradedEvent {
            new_wasm_hash,
            schema_version,
            timestamp: env.ledger().timestamp(),
        },
    );
}
