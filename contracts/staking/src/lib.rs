#![no_std]

pub mod errors;
pub mod events;
pub mod ledger;
pub mod packages;
pub mod pool;
pub mod rewards;

use mbn_common::{extend_instance_ttl, ownable, pausable};
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, BytesN, Env, String, Symbol, Vec,
};

pub use errors::{ContractError, ErrorCategory};
pub use ledger::Stake;
pub use packages::{standard_packages, NamedPackage, Package};

// ── Storage key constants ────────────────────────────────────────────────────
//
// Owner, pending owner and the pause flag are kept by `mbn_common`; registry,
// ledger and pool keys live in their modules. The layout is additive-only
// across upgrades.

const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN: Symbol = symbol_short!("TOKEN");
const SCHEMA: Symbol = symbol_short!("SCHEMA");

/// Storage layout version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `owner`    – holder of the owner capability (pool removal, pausing,
    ///                upgrades).
    /// * `token`    – address of the token that is staked and paid out.
    /// * `package_table` – the tier table; names must be unique. It cannot
    ///                     be changed afterwards.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        package_table: Vec<NamedPackage>,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        for package in package_table.iter() {
            packages::register(&env, &package)?;
        }

        ownable::set_owner(&env, &owner);
        pausable::set_paused(&env, false);
        env.storage().instance().set(&TOKEN, &token);
        env.storage().instance().set(&SCHEMA, &SCHEMA_VERSION);
        env.storage().instance().set(&INITIALIZED, &true);
        // Pool and total staked start at zero; readers default absent keys.
        extend_instance_ttl(&env);

        events::publish_initialized(&env, owner, token, package_table.len());

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` tokens into `package` and return the new stake index.
    ///
    /// The contract pulls the tokens with `transfer_from`, so `staker` must
    /// have approved the contract as spender for at least `amount`.
    pub fn stake_tokens(
        env: Env,
        staker: Address,
        amount: i128,
        package: String,
    ) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if pausable::is_paused(&env) {
            return Err(ContractError::StakingPaused);
        }
        packages::lookup(&env, &package)?;

        // 1. Pull principal first; a failed transfer aborts before any
        //    ledger write.
        let this = env.current_contract_address();
        Self::token(&env)?.transfer_from(&this, &staker, &this, &amount);

        // 2. Record the stake.
        let now = env.ledger().timestamp();
        let index = ledger::append(&env, &staker, &package, amount, now)?;
        ledger::add_to_total(&env, amount)?;
        extend_instance_ttl(&env);

        log!(&env, "stake added", staker, index, amount);
        events::publish_stake_added(&env, staker, package, amount, index);

        Ok(index)
    }

    /// Withdraw principal plus reward for stake `index`.
    ///
    /// Fails with `LockNotElapsed` before the package lock has passed and
    /// with `InsufficientRewardPool` when the pool cannot cover the reward in
    /// full. Returns the amount paid out.
    pub fn unstake(env: Env, staker: Address, index: u32) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let stake = Self::withdrawable_stake(&env, &staker, index)?;
        let package = packages::lookup(&env, &stake.package)?;
        let elapsed = Self::elapsed(&env, &stake);
        let reward = rewards::accrued(stake.amount, &package, elapsed)?;

        if reward > pool::balance(&env) {
            log!(&env, "reward pool short", staker, index, reward);
            return Err(ContractError::InsufficientRewardPool);
        }
        let payout = stake
            .amount
            .checked_add(reward)
            .ok_or(ContractError::ArithmeticOverflow)?;

        // Settle the ledger before paying out (checks-effects-interactions).
        pool::debit(&env, reward)?;
        ledger::mark_withdrawn(&env, &staker, index)?;
        ledger::sub_from_total(&env, stake.amount)?;
        extend_instance_ttl(&env);

        Self::token(&env)?.transfer(&env.current_contract_address(), &staker, &payout);

        log!(&env, "unstaked", staker, index, payout);
        events::publish_unstaked(&env, staker, index, stake.amount, reward);

        Ok(payout)
    }

    /// Withdraw principal only, leaving the reward pool untouched.
    ///
    /// Subject to the same lock and single-withdrawal rules as `unstake`.
    /// Returns the principal paid out.
    pub fn force_unstake(env: Env, staker: Address, index: u32) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let stake = Self::withdrawable_stake(&env, &staker, index)?;

        ledger::mark_withdrawn(&env, &staker, index)?;
        ledger::sub_from_total(&env, stake.amount)?;
        extend_instance_ttl(&env);

        Self::token(&env)?.transfer(&env.current_contract_address(), &staker, &stake.amount);

        log!(&env, "forced unstake", staker, index, stake.amount);
        events::publish_forced_unstake(&env, staker, index);

        Ok(stake.amount)
    }

    /// Reward stake `index` would earn right now. Informational; works on
    /// withdrawn stakes too.
    pub fn check_reward(env: Env, staker: Address, index: u32) -> Result<i128, ContractError> {
        let stake = ledger::get(&env, &staker, index)?;
        let package = packages::lookup(&env, &stake.package)?;
        rewards::accrued(stake.amount, &package, Self::elapsed(&env, &stake))
    }

    // ── Reward pool ─────────────────────────────────────────────────────────

    /// Fund the reward pool. Anyone may contribute; the contract pulls
    /// `amount` with `transfer_from` against the contributor's approval.
    pub fn add_to_reward_pool(
        env: Env,
        contributor: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        contributor.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let this = env.current_contract_address();
        Self::token(&env)?.transfer_from(&this, &contributor, &this, &amount);

        let balance = pool::credit(&env, amount)?;
        extend_instance_ttl(&env);

        events::publish_reward_added(&env, contributor, amount);

        Ok(balance)
    }

    /// Move `amount` out of the reward pool back to the owner.
    pub fn remove_from_reward_pool(
        env: Env,
        owner: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let balance = pool::debit(&env, amount)?;
        extend_instance_ttl(&env);

        Self::token(&env)?.transfer(&env.current_contract_address(), &owner, &amount);

        events::publish_reward_removed(&env, owner, amount);

        Ok(balance)
    }

    // ── Operational gate ────────────────────────────────────────────────────

    /// Block new stakes. Withdrawals and reward queries are unaffected.
    pub fn pause_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        pausable::set_paused(&env, true);
        extend_instance_ttl(&env);

        events::publish_paused(&env);

        Ok(())
    }

    pub fn unpause_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        pausable::set_paused(&env, false);
        extend_instance_ttl(&env);

        events::publish_unpaused(&env);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn package_length(env: Env) -> u32 {
        packages::length(&env)
    }

    pub fn package_name(env: Env, index: u32) -> Result<String, ContractError> {
        packages::name_at(&env, index)
    }

    pub fn get_package(env: Env, name: String) -> Result<Package, ContractError> {
        packages::lookup(&env, &name)
    }

    /// Number of stakes ever opened by `staker`.
    pub fn stake_count(env: Env, staker: Address) -> u32 {
        ledger::count(&env, &staker)
    }

    pub fn get_stake(env: Env, staker: Address, index: u32) -> Result<Stake, ContractError> {
        ledger::get(&env, &staker, index)
    }

    pub fn reward_pool_balance(env: Env) -> i128 {
        pool::balance(&env)
    }

    /// Principal currently held in active stakes.
    pub fn total_staked(env: Env) -> i128 {
        ledger::total_staked(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownable::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn schema_version(env: Env) -> Result<u32, ContractError> {
        env.storage()
            .instance()
            .get(&SCHEMA)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Owner transfer (two-step) ──────────────────────────────────────────

    /// Propose a new owner. Only the current owner can call this.
    /// The new owner must call `accept_owner` to complete the transfer.
    pub fn propose_owner(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        ownable::set_pending_owner(&env, &new_owner);

        events::publish_owner_proposed(&env, current_owner, new_owner);

        Ok(())
    }

    /// Accept the pending owner transfer. Only the proposed owner can call this.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        if ownable::get_pending_owner(&env).is_none() {
            return Err(ContractError::NoPendingOwner);
        }
        let old_owner =
            ownable::accept_pending_owner(&env, &new_owner).ok_or(ContractError::NotOwner)?;

        events::publish_owner_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    /// Cancel a pending owner transfer. Only the current owner can call this.
    pub fn cancel_owner_transfer(env: Env, current_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        let pending = ownable::get_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        ownable::clear_pending_owner(&env);

        events::publish_owner_transfer_cancelled(&env, current_owner, pending);

        Ok(())
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        ownable::get_pending_owner(&env)
    }

    // ── Upgrade ─────────────────────────────────────────────────────────────

    /// Swap the contract logic in place. Storage is left untouched, so the
    /// registry, stakes, pool and owner carry over unchanged.
    pub fn upgrade(env: Env, owner: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        events::publish_upgraded(&env, new_wasm_hash.clone(), SCHEMA_VERSION);
        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` does not hold the owner capability.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !ownable::is_owner(env, caller) {
            log!(env, "owner check failed", caller.clone());
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }

    fn token(env: &Env) -> Result<token::Client<'_>, ContractError> {
        let address: Address = env
            .storage()
            .instance()
            .get(&TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        Ok(token::Client::new(env, &address))
    }

    fn elapsed(env: &Env, stake: &Stake) -> u64 {
        env.ledger().timestamp().saturating_sub(stake.start_time)
    }

    /// Shared gate for both exits: the stake exists, is still active, and its
    /// package lock has passed.
    fn withdrawable_stake(env: &Env, staker: &Address, index: u32) -> Result<Stake, ContractError> {
        let stake = ledger::get(env, staker, index)?;
        if stake.withdrawn {
            return Err(ContractError::AlreadyWithdrawn);
        }
        let package = packages::lookup(env, &stake.package)?;
        if Self::elapsed(env, &stake) < package.lock_duration {
            return Err(ContractError::LockNotElapsed);
        }
        Ok(stake)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
