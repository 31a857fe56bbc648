use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

// ── Owner ────────────────────────────────────────────────────────────────────

/// Stores `owner` as the sole holder of the owner capability.
/// Only callable internally; callers must verify authorization beforehand.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, if one has been set.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns `true` if `caller` holds the owner capability.
///
/// The caller must have already been authenticated via `require_auth()`;
/// this is a plain identity comparison against the stored owner.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

// ── Two-step handover ────────────────────────────────────────────────────────

/// Records `candidate` as the proposed next owner, replacing any earlier
/// proposal.
pub fn set_pending_owner(env: &Env, candidate: &Address) {
    env.storage().instance().set(&PENDING_OWNER, candidate);
}

pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

pub fn clear_pending_owner(env: &Env) {
    env.storage().instance().remove(&PENDING_OWNER);
}

/// Completes a handover if `candidate` is the pending owner.
///
/// Returns the previous owner on success, `None` when nothing is pending or
/// `candidate` is not the proposed address.
pub fn accept_pending_owner(env: &Env, candidate: &Address) -> Option<Address> {
    let pending = get_pending_owner(env)?;
    if pending != *candidate {
        return None;
    }
    let previous = get_owner(env)?;
    set_owner(env, candidate);
    clear_pending_owner(env);
    Some(previous)
}
