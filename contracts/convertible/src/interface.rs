use soroban_sdk::{contractclient, Address, Env, String};

use consumable::ComponentKind;

/// Client-only interface for invoking the ConvertibleToken contract.
#[allow(dead_code)]
#[contractclient(name = "ConvertibleTokenClient")]
pub trait ConvertibleTokenInterface {
    fn init(
        env: Env,
        owner: Address,
        exchange_token: Address,
        name: String,
        symbol: String,
        decimals: u32,
        purchase_price: i128,
        intrinsic_value: i128,
    );

    fn kind(env: Env) -> ComponentKind;

    fn register_with_exchange(env: Env);

    fn exchange_token(env: Env) -> Address;

    fn purchase_price_exchange_rate(env: Env) -> i128;

    fn intrinsic_value_exchange_rate(env: Env) -> i128;

    fn reserve(env: Env) -> i128;

    fn amount_exchange_token_needed(env: Env, amount: i128) -> i128;

    fn amount_exchange_token_provided(env: Env, amount: i128) -> i128;

    fn mint_by_exchange(env: Env, caller: Address, amount: i128);

    fn exchange_grant(env: Env, recipient: Address, amount: i128);

    fn prepaid_supply(env: Env) -> i128;

    fn burn_by_exchange(env: Env, caller: Address, amount: i128) -> i128;

    fn transfer_token(env: Env, token: Address, to: Address, amount: i128);

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

    fn owner(env: Env) -> Address;

    fn is_enabled(env: Env) -> bool;

    fn enable(env: Env);

    fn disable(env: Env);
}
