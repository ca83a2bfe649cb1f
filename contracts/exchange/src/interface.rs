use soroban_sdk::{contractclient, Address, Env, String, Vec};

use consumable::ComponentKind;

use crate::types::ExchangeRate;

/// Client-only interface for invoking the Exchange contract.
#[allow(dead_code)]
#[contractclient(name = "ExchangeClient")]
pub trait ExchangeInterface {
    fn init(env: Env, owner: Address, name: String, symbol: String, decimals: u32);

    fn kind(env: Env) -> ComponentKind;

    fn register_token(env: Env, token: Address, purchase_price: i128, intrinsic_value: i128);

    fn convertible_count(env: Env) -> u32;

    fn convertible_at(env: Env, index: u32) -> Address;

    fn convertibles(env: Env) -> Vec<Address>;

    fn is_registered(env: Env, token: Address) -> bool;

    fn exchange_rate(env: Env, token: Address) -> ExchangeRate;

    fn exchange_to(env: Env, caller: Address, token: Address, amount: i128) -> i128;

    fn exchange_from(env: Env, caller: Address, token: Address, amount: i128) -> i128;

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

    fn mint(env: Env, to: Address, amount: i128);

    fn owner(env: Env) -> Address;

    fn is_enabled(env: Env) -> bool;

    fn enable(env: Env);

    fn disable(env: Env);
}
