//! Fungible ledger rules shared by every consumable.
//!
//! Balances, supply, allowances and metadata are stored by the fungible base of
//! `stellar-tokens`. This module puts the economy's rules in front of it:
//! shortfalls are named with [`EconomyError`] before the base is touched, the
//! optional per-account limit is checked before any credit, and pull-rights
//! are granted until the furthest ledger the network allows. Authorization is
//! left to the entry points.

use soroban_sdk::{panic_with_error, symbol_short, Address, Env, String};
use stellar_tokens::fungible::Base;

use crate::{storage::LedgerKey, EconomyError, TokenMetadata};

pub fn init_metadata(e: &Env, name: String, symbol: String, decimals: u32) {
    Base::set_metadata(e, decimals, name, symbol);
}

pub fn metadata(e: &Env) -> TokenMetadata {
    TokenMetadata {
        name: Base::name(e),
        symbol: Base::symbol(e),
        decimals: Base::decimals(e),
    }
}

pub fn require_non_negative(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, EconomyError::InvalidAmount);
    }
}

pub fn total_supply(e: &Env) -> i128 {
    Base::total_supply(e)
}

pub fn balance(e: &Env, id: &Address) -> i128 {
    Base::balance(e, id)
}

pub fn allowance(e: &Env, owner: &Address, spender: &Address) -> i128 {
    Base::allowance(e, owner, spender)
}

/// Replaces the pull-right `spender` holds on `owner`.
pub fn approve(e: &Env, owner: &Address, spender: &Address, amount: i128) {
    require_non_negative(e, amount);
    write_allowance(e, owner, spender, amount);
}

pub fn increase_allowance(e: &Env, owner: &Address, spender: &Address, amount: i128) {
    require_non_negative(e, amount);
    let next = allowance(e, owner, spender)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, EconomyError::Overflow));
    write_allowance(e, owner, spender, next);
}

pub fn decrease_allowance(e: &Env, owner: &Address, spender: &Address, amount: i128) {
    require_non_negative(e, amount);
    let current = allowance(e, owner, spender);
    if current < amount {
        panic_with_error!(e, EconomyError::InsufficientAllowance);
    }
    write_allowance(e, owner, spender, current - amount);
}

/// Consumes `amount` of the pull-right `spender` holds on `owner`.
pub fn spend_allowance(e: &Env, owner: &Address, spender: &Address, amount: i128) {
    require_non_negative(e, amount);
    if allowance(e, owner, spender) < amount {
        panic_with_error!(e, EconomyError::InsufficientAllowance);
    }
    Base::spend_allowance(e, owner, spender, amount);
}

pub fn mint(e: &Env, to: &Address, amount: i128) {
    require_non_negative(e, amount);
    if total_supply(e).checked_add(amount).is_none() {
        panic_with_error!(e, EconomyError::Overflow);
    }
    require_within_limit(e, to, amount);
    Base::update(e, None, Some(to), amount);
    e.events()
        .publish((symbol_short!("mint"), to.clone()), amount);
}

pub fn burn(e: &Env, from: &Address, amount: i128) {
    require_non_negative(e, amount);
    require_covered(e, from, amount);
    Base::update(e, Some(from), None, amount);
    e.events()
        .publish((symbol_short!("burn"), from.clone()), amount);
}

pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    require_non_negative(e, amount);
    require_covered(e, from, amount);
    if from != to {
        require_within_limit(e, to, amount);
    }
    Base::update(e, Some(from), Some(to), amount);
    e.events()
        .publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
}

/// Turns on the per-account limit policy for this token.
pub fn enable_limits(e: &Env) {
    e.storage().instance().set(&LedgerKey::Limited, &true);
}

pub fn limits_enabled(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&LedgerKey::Limited)
        .unwrap_or(false)
}

pub fn set_limit(e: &Env, account: &Address, limit: i128) {
    require_non_negative(e, limit);
    e.storage()
        .persistent()
        .set(&LedgerKey::Limit(account.clone()), &limit);
    e.events()
        .publish((symbol_short!("limit"), account.clone()), limit);
}

/// Accounts without a limit are not restricted by the policy.
pub fn limit_of(e: &Env, account: &Address) -> Option<i128> {
    e.storage()
        .persistent()
        .get::<_, i128>(&LedgerKey::Limit(account.clone()))
}

fn require_covered(e: &Env, from: &Address, amount: i128) {
    if balance(e, from) < amount {
        panic_with_error!(e, EconomyError::InsufficientBalance);
    }
}

fn require_within_limit(e: &Env, to: &Address, amount: i128) {
    if !limits_enabled(e) {
        return;
    }
    if let Some(limit) = limit_of(e, to) {
        let next = balance(e, to)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(e, EconomyError::Overflow));
        if next > limit {
            panic_with_error!(e, EconomyError::LimitExceeded);
        }
    }
}

fn write_allowance(e: &Env, owner: &Address, spender: &Address, amount: i128) {
    let live_until = e.ledger().max_live_until_ledger();
    Base::set_allowance(e, owner, spender, amount, live_until);
    e.events().publish(
        (symbol_short!("approve"), owner.clone(), spender.clone()),
        amount,
    );
}
