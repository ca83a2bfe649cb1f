use soroban_sdk::{contractclient, Address, Env, String};

use crate::ComponentKind;

/// Operations every consumable (plain token, exchange, convertible) exposes.
#[allow(dead_code)]
#[contractclient(name = "ConsumableClient")]
pub trait ConsumableInterface {
    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn decimals(env: Env) -> u32;

    fn total_supply(env: Env) -> i128;

    fn balance(env: Env, id: Address) -> i128;

    fn allowance(env: Env, owner: Address, spender: Address) -> i128;

    fn approve(env: Env, owner: Address, spender: Address, amount: i128);

    fn increase_allowance(env: Env, owner: Address, spender: Address, amount: i128);

    fn decrease_allowance(env: Env, owner: Address, spender: Address, amount: i128);

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn burn(env: Env, from: Address, amount: i128);

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128);

    fn is_enabled(env: Env) -> bool;
}

/// Capability query answered by every contract of the economy.
#[allow(dead_code)]
#[contractclient(name = "ComponentClient")]
pub trait ComponentInterface {
    fn kind(env: Env) -> ComponentKind;
}
