//! Shared utilities for the MBN contract suite.
//!
//! This crate provides:
//! - [`ownable`]: single-owner capability storage with a two-step handover.
//! - [`pausable`]: a global operational gate.
//! - TTL helpers so every contract bumps storage with the same thresholds.

#![no_std]

use soroban_sdk::{Env, IntoVal, Val};

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod ownable;
pub mod pausable;

// ── Storage TTL ──────────────────────────────────────────────────────────────

/// Ledgers closed per day at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are bumped once their remaining TTL drops below this.
pub const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;

/// Target TTL after a bump.
pub const TTL_EXTEND_TO: u32 = 180 * DAY_IN_LEDGERS;

/// Extends the TTL of the contract instance (all instance keys share it).
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of a single persistent entry.
pub fn extend_persistent_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
