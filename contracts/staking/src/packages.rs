//! Package registry.
//!
//! Packages are written once by `initialize` and read-only afterwards. The
//! ordered name list backs index-based enumeration; each package's terms live
//! in their own persistent entry keyed by name.

use mbn_common::extend_persistent_ttl;
use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol, Vec};

use crate::ContractError;

const PACKAGE: Symbol = symbol_short!("PKG");
const PACKAGE_LIST: Symbol = symbol_short!("PKG_LIST");

/// Longest accepted package name, in bytes.
pub const MAX_NAME_LEN: u32 = 32;

pub const DAY: u64 = 86_400;

/// Lock and reward terms of a staking tier.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    /// Seconds a stake must age before any withdrawal; reward is zero before.
    pub lock_duration: u64,
    /// Seconds per completed reward step.
    pub reward_period: u64,
    /// Reward per completed step, in basis points of principal.
    pub rate_bps: u32,
    /// Upper bound on counted steps.
    pub max_periods: u32,
}

/// A package paired with its registry name, as passed to `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedPackage {
    pub name: String,
    pub terms: Package,
}

/// The default tier table.
pub fn standard_packages(env: &Env) -> Vec<NamedPackage> {
    let mut packages = Vec::new(env);
    packages.push_back(NamedPackage {
        name: String::from_str(env, "Silver Package"),
        terms: Package {
            lock_duration: 30 * DAY,
            reward_period: 30 * DAY,
            rate_bps: 800,
            max_periods: 12,
        },
    });
    packages.push_back(NamedPackage {
        name: String::from_str(env, "Gold Package"),
        terms: Package {
            lock_duration: 60 * DAY,
            reward_period: 60 * DAY,
            rate_bps: 1_800,
            max_periods: 6,
        },
    });
    packages.push_back(NamedPackage {
        name: String::from_str(env, "Platinum Package"),
        terms: Package {
            lock_duration: 90 * DAY,
            reward_period: 90 * DAY,
            rate_bps: 3_000,
            max_periods: 4,
        },
    });
    packages
}

fn package_key(name: &String) -> (Symbol, String) {
    (PACKAGE, name.clone())
}

fn validate(package: &NamedPackage) -> Result<(), ContractError> {
    let len = package.name.len();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(ContractError::InvalidPackage);
    }
    let terms = &package.terms;
    if terms.lock_duration == 0 || terms.reward_period == 0 || terms.max_periods == 0 {
        return Err(ContractError::InvalidPackage);
    }
    Ok(())
}

pub fn names(env: &Env) -> Vec<String> {
    env.storage()
        .instance()
        .get(&PACKAGE_LIST)
        .unwrap_or(Vec::new(env))
}

/// Adds a package to the registry. Names are unique; an existing entry is
/// never overwritten.
pub fn register(env: &Env, package: &NamedPackage) -> Result<(), ContractError> {
    validate(package)?;

    let key = package_key(&package.name);
    if env.storage().persistent().has(&key) {
        return Err(ContractError::DuplicatePackage);
    }

    env.storage().persistent().set(&key, &package.terms);
    extend_persistent_ttl(env, &key);

    let mut list = names(env);
    list.push_back(package.name.clone());
    env.storage().instance().set(&PACKAGE_LIST, &list);
    Ok(())
}

pub fn length(env: &Env) -> u32 {
    names(env).len()
}

pub fn name_at(env: &Env, index: u32) -> Result<String, ContractError> {
    names(env).get(index).ok_or(ContractError::OutOfRange)
}

pub fn lookup(env: &Env, name: &String) -> Result<Package, ContractError> {
    let key = package_key(name);
    let package: Package = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::UnknownPackage)?;
    extend_persistent_ttl(env, &key);
    Ok(package)
}
