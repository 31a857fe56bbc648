//! Global operational gate.
//!
//! Contracts decide which entrypoints consult the gate; this module only owns
//! the flag. An absent flag reads as "not paused".

use soroban_sdk::{symbol_short, Env, Symbol};

const PAUSED: Symbol = symbol_short!("PAUSED");

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Sets the gate. Only callable internally; callers must verify
/// authorization beforehand.
pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&PAUSED, &paused);
}
