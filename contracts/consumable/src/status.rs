//! Ownership and the pause switch every contract carries.
//!
//! Entry points gate themselves with `#[only_owner]` and `#[when_not_paused]`
//! from `stellar-macros`; these helpers cover initialization and the reads.

use soroban_sdk::{panic_with_error, Address, Env};
use stellar_access::ownable;
use stellar_contract_utils::pausable;

use crate::EconomyError;

/// Records `owner`. Every contract calls this first from `init`, so an owner
/// already being present means the contract was initialized before.
pub fn init_owner(e: &Env, owner: &Address) {
    if ownable::get_owner(e).is_some() {
        panic_with_error!(e, EconomyError::AlreadyInitialized);
    }
    ownable::set_owner(e, owner);
}

pub fn owner(e: &Env) -> Address {
    match ownable::get_owner(e) {
        Some(owner) => owner,
        None => panic_with_error!(e, EconomyError::NotInitialized),
    }
}

pub fn is_enabled(e: &Env) -> bool {
    !pausable::paused(e)
}

pub fn enable(e: &Env) {
    pausable::unpause(e);
}

pub fn disable(e: &Env) {
    pausable::pause(e);
}
