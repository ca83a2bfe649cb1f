use activity::ActivityClient;
use artifact::ArtifactClient;
use consumable::{aggregate, status, ComponentKind, EconomyError};
use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Address, Env, Vec};
use stellar_macros::{only_owner, when_not_paused};

use crate::{
    storage::DataKey,
    types::{ExecutionStage, ItemRef},
};

#[contract]
pub struct ActivityExecutor;

#[contractimpl]
impl ActivityExecutor {
    pub fn init(e: Env, owner: Address) {
        status::init_owner(&e, &owner);
        e.storage()
            .instance()
            .set(&DataKey::Components, &Vec::<Address>::new(&e));
    }

    /// Asks `component` for its kind once and remembers the role it answered with.
    #[only_owner]
    pub fn register_component(e: Env, component: Address) -> ComponentKind {
        let key = DataKey::Component(component.clone());
        if e.storage().persistent().has(&key) {
            panic_with_error!(&e, EconomyError::AlreadyRegistered);
        }
        let kind = match aggregate::kind_of(&e, &component) {
            Some(kind) => kind,
            None => panic_with_error!(&e, EconomyError::CapabilityMismatch),
        };

        e.storage().persistent().set(&key, &kind);
        let mut components = read_components(&e);
        components.push_back(component.clone());
        e.storage()
            .instance()
            .set(&DataKey::Components, &components);

        e.events()
            .publish((symbol_short!("component"), component), kind);
        kind
    }

    pub fn component_kind(e: Env, component: Address) -> Option<ComponentKind> {
        e.storage()
            .persistent()
            .get(&DataKey::Component(component))
    }

    pub fn components(e: Env) -> Vec<Address> {
        read_components(&e)
    }

    /// Runs one turn of `activity` for `player`: spends one use of each of
    /// `items`, gathers the required basket from `player` then `helpers`
    /// through the pull-rights they granted this executor, lets the activity
    /// convert it, and hands out the provided basket. Returns how many times
    /// `player` has completed the activity.
    #[when_not_paused]
    pub fn execute(
        e: Env,
        player: Address,
        activity: Address,
        helpers: Vec<Address>,
        items: Vec<ItemRef>,
    ) -> u32 {
        player.require_auth();

        let mut run = Execution {
            e: &e,
            player,
            activity,
            helpers,
            items,
            executed: 0,
        };
        let mut stage = ExecutionStage::Pending;
        while let Some(next) = stage.next() {
            run.enter(next);
            stage = next;
        }
        run.executed
    }

    pub fn owner(e: Env) -> Address {
        status::owner(&e)
    }

    pub fn is_enabled(e: Env) -> bool {
        status::is_enabled(&e)
    }

    #[only_owner]
    pub fn enable(e: Env) {
        status::enable(&e);
    }

    #[only_owner]
    pub fn disable(e: Env) {
        status::disable(&e);
    }
}

/// One run of [`ActivityExecutor::execute`]. Each stage does its work on
/// entry; the first failing stage aborts the invocation and the host drops
/// whatever the earlier stages did.
struct Execution<'a> {
    e: &'a Env,
    player: Address,
    activity: Address,
    helpers: Vec<Address>,
    items: Vec<ItemRef>,
    executed: u32,
}

impl<'a> Execution<'a> {
    fn enter(&mut self, stage: ExecutionStage) {
        match stage {
            ExecutionStage::Pending => {}
            ExecutionStage::ItemsValidated => self.validate_components(),
            ExecutionStage::ItemsSpent => self.spend_items(),
            ExecutionStage::Consumed => self.consume(),
            ExecutionStage::HooksInvoked => self.hooks().on_execute(&self.player),
            ExecutionStage::Provided => self.executed = self.hooks().complete(&self.player),
            ExecutionStage::Committed => self.e.events().publish(
                (
                    symbol_short!("executed"),
                    self.activity.clone(),
                    self.player.clone(),
                ),
                self.executed,
            ),
        }
    }

    fn validate_components(&self) {
        require_kind(self.e, &self.activity, ComponentKind::Activity);
        for item in self.items.iter() {
            require_kind(self.e, &item.artifact, ComponentKind::Artifact);
            let holder = ArtifactClient::new(self.e, &item.artifact).owner_of(&item.item_id);
            if holder != self.player {
                panic_with_error!(self.e, EconomyError::NotOwner);
            }
        }
    }

    fn spend_items(&self) {
        for item in self.items.iter() {
            ArtifactClient::new(self.e, &item.artifact).use_item(
                &self.player,
                &item.item_id,
                &self.player,
            );
        }
    }

    fn consume(&self) {
        let mut accounts = Vec::new(self.e);
        accounts.push_back(self.player.clone());
        accounts.append(&self.helpers);
        aggregate::consume(
            self.e,
            &self.e.current_contract_address(),
            &self.hooks().required_consumables(),
            &accounts,
            &self.activity,
        );
    }

    fn hooks(&self) -> ActivityClient<'a> {
        ActivityClient::new(self.e, &self.activity)
    }
}

fn require_kind(e: &Env, component: &Address, expected: ComponentKind) {
    let kind = e
        .storage()
        .persistent()
        .get::<_, ComponentKind>(&DataKey::Component(component.clone()));
    if kind != Some(expected) {
        panic_with_error!(e, EconomyError::CapabilityMismatch);
    }
}

fn read_components(e: &Env) -> Vec<Address> {
    match e.storage().instance().get::<_, Vec<Address>>(&DataKey::Components) {
        Some(components) => components,
        None => panic_with_error!(e, EconomyError::NotInitialized),
    }
}
