use soroban_sdk::{contractclient, Address, Env, Vec};

use consumable::{ComponentKind, ConsumableAmount};

use crate::types::ActivityKind;

/// Client-only interface for invoking the Activity contract.
#[allow(dead_code)]
#[contractclient(name = "ActivityClient")]
pub trait ActivityInterface {
    fn init(
        env: Env,
        owner: Address,
        executor: Address,
        required: Vec<ConsumableAmount>,
        provided: Vec<ConsumableAmount>,
        exchange: Option<Address>,
    );

    fn kind(env: Env) -> ComponentKind;

    fn activity_kind(env: Env) -> ActivityKind;

    fn executor(env: Env) -> Address;

    fn required_consumables(env: Env) -> Vec<ConsumableAmount>;

    fn provided_consumables(env: Env) -> Vec<ConsumableAmount>;

    fn exchange_profit(env: Env) -> i128;

    fn executed_by(env: Env, player: Address) -> u32;

    fn total_executed(env: Env) -> u32;

    fn on_execute(env: Env, player: Address);

    fn complete(env: Env, player: Address) -> u32;

    fn transfer_token(env: Env, token: Address, to: Address, amount: i128);

    fn owner(env: Env) -> Address;

    fn is_enabled(env: Env) -> bool;

    fn enable(env: Env);

    fn disable(env: Env);
}
