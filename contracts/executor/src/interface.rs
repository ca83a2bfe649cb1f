use soroban_sdk::{contractclient, Address, Env, Vec};

use consumable::ComponentKind;

use crate::types::ItemRef;

/// Client-only interface for invoking the ActivityExecutor contract.
#[allow(dead_code)]
#[contractclient(name = "ActivityExecutorClient")]
pub trait ActivityExecutorInterface {
    fn init(env: Env, owner: Address);

    fn register_component(env: Env, component: Address) -> ComponentKind;

    fn component_kind(env: Env, component: Address) -> Option<ComponentKind>;

    fn components(env: Env) -> Vec<Address>;

    fn execute(
        env: Env,
        player: Address,
        activity: Address,
        helpers: Vec<Address>,
        items: Vec<ItemRef>,
    ) -> u32;

    fn owner(env: Env) -> Address;

    fn is_enabled(env: Env) -> bool;

    fn enable(env: Env);

    fn disable(env: Env);
}
