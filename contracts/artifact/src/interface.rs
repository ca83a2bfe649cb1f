use soroban_sdk::{contractclient, Address, Env, String, Vec};

use consumable::{ComponentKind, ConsumableAmount};

/// Client-only interface for invoking the Artifact contract.
#[allow(dead_code)]
#[contractclient(name = "ArtifactClient")]
pub trait ArtifactInterface {
    fn init(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        initial_uses: u32,
        provided: Vec<ConsumableAmount>,
    );

    fn kind(env: Env) -> ComponentKind;

    fn mint(env: Env, to: Address) -> u32;

    fn use_item(env: Env, owner: Address, item_id: u32, target: Address);

    fn transfer(env: Env, from: Address, to: Address, item_id: u32);

    fn transfer_token(env: Env, token: Address, to: Address, amount: i128);

    fn uses_left(env: Env, item_id: u32) -> u32;

    fn total_uses_left(env: Env) -> u32;

    fn initial_uses(env: Env) -> u32;

    fn provided_consumables(env: Env) -> Vec<ConsumableAmount>;

    fn owner_of(env: Env, item_id: u32) -> Address;

    fn balance_of(env: Env, owner: Address) -> u32;

    fn total_items(env: Env) -> u32;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn owner(env: Env) -> Address;

    fn is_enabled(env: Env) -> bool;

    fn enable(env: Env);

    fn disable(env: Env);
}
