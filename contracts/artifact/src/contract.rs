use consumable::{
    aggregate, base, status, ComponentKind, ConsumableAmount, ConsumableClient, EconomyError,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Address, Env, String, Vec};
use stellar_macros::{only_owner, when_not_paused};
use stellar_tokens::non_fungible::Base;

use crate::storage::DataKey;

#[contract]
pub struct Artifact;

#[contractimpl]
impl Artifact {
    pub fn init(
        e: Env,
        owner: Address,
        name: String,
        symbol: String,
        initial_uses: u32,
        provided: Vec<ConsumableAmount>,
    ) {
        status::init_owner(&e, &owner);
        if initial_uses == 0 {
            panic_with_error!(&e, EconomyError::InvalidAmount);
        }
        aggregate::validate_basket(&e, &provided);
        Base::set_metadata(&e, String::from_str(&e, ""), name, symbol);

        e.storage()
            .instance()
            .set(&DataKey::InitialUses, &initial_uses);
        e.storage().instance().set(&DataKey::Provides, &provided);
        e.storage().instance().set(&DataKey::Minted, &0u32);
        e.storage().instance().set(&DataKey::OutstandingUses, &0u32);
    }

    pub fn kind(_e: Env) -> ComponentKind {
        ComponentKind::Artifact
    }

    /// Mints a fresh item to `to`. The artifact must already hold enough of
    /// every provided token, beyond what earlier uses granted and nobody
    /// claimed yet, to serve all outstanding uses, the new item's included.
    #[only_owner]
    #[when_not_paused]
    pub fn mint(e: Env, to: Address) -> u32 {
        let initial_uses = read_initial_uses(&e);
        let outstanding = read_outstanding_uses(&e)
            .checked_add(initial_uses)
            .unwrap_or_else(|| panic_with_error!(&e, EconomyError::Overflow));
        require_reserve(&e, outstanding, None);

        let item_id = Base::sequential_mint(&e, &to);
        write_uses_left(&e, item_id, initial_uses);
        e.storage()
            .instance()
            .set(&DataKey::Minted, &(read_minted(&e) + 1));
        e.storage()
            .instance()
            .set(&DataKey::OutstandingUses, &outstanding);
        item_id
    }

    /// Spends one use of `item_id` and grants `target` pull-rights on the
    /// provided basket.
    #[when_not_paused]
    pub fn use_item(e: Env, owner: Address, item_id: u32, target: Address) {
        owner.require_auth();

        let uses_left = read_uses_left(&e, item_id);
        if Base::owner_of(&e, item_id) != owner {
            panic_with_error!(&e, EconomyError::NotOwner);
        }
        if uses_left == 0 {
            panic_with_error!(&e, EconomyError::InsufficientUses);
        }
        write_uses_left(&e, item_id, uses_left - 1);
        e.storage()
            .instance()
            .set(&DataKey::OutstandingUses, &(read_outstanding_uses(&e) - 1));

        aggregate::provide(&e, &read_provided(&e), &target);

        e.events().publish(
            (symbol_short!("item_used"), owner, target),
            (item_id, uses_left - 1),
        );
    }

    /// Hands `item_id` and its remaining uses over to `to`.
    #[when_not_paused]
    pub fn transfer(e: Env, from: Address, to: Address, item_id: u32) {
        read_uses_left(&e, item_id);
        if Base::owner_of(&e, item_id) != from {
            panic_with_error!(&e, EconomyError::NotOwner);
        }
        Base::transfer(&e, &from, &to, item_id);
    }

    /// Moves `amount` of `token` held by the artifact to `to`, keeping what
    /// the outstanding uses and the unclaimed grants still need.
    #[only_owner]
    pub fn transfer_token(e: Env, token: Address, to: Address, amount: i128) {
        base::require_non_negative(&e, amount);
        require_reserve(&e, read_outstanding_uses(&e), Some((&token, amount)));

        ConsumableClient::new(&e, &token).transfer(&e.current_contract_address(), &to, &amount);
        e.events()
            .publish((symbol_short!("sweep"), token, to), amount);
    }

    pub fn uses_left(e: Env, item_id: u32) -> u32 {
        read_uses_left(&e, item_id)
    }

    pub fn total_uses_left(e: Env) -> u32 {
        read_outstanding_uses(&e)
    }

    pub fn initial_uses(e: Env) -> u32 {
        read_initial_uses(&e)
    }

    pub fn provided_consumables(e: Env) -> Vec<ConsumableAmount> {
        read_provided(&e)
    }

    pub fn owner_of(e: Env, item_id: u32) -> Address {
        read_uses_left(&e, item_id);
        Base::owner_of(&e, item_id)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        Base::balance(&e, &owner)
    }

    pub fn total_items(e: Env) -> u32 {
        read_minted(&e)
    }

    pub fn name(e: Env) -> String {
        Base::name(&e)
    }

    pub fn symbol(e: Env) -> String {
        Base::symbol(&e)
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

/// Fails with `InsufficientReserve` unless the artifact's free holdings, less
/// an optional outgoing `(token, amount)`, cover `uses` further uses. Stock
/// already granted to earlier targets is not free until they claim it.
fn require_reserve(e: &Env, uses: u32, outgoing: Option<(&Address, i128)>) {
    let basket = read_provided(e);

    if let Some((token, amount)) = outgoing {
        if aggregate::free_balance(e, token) < amount {
            panic_with_error!(e, EconomyError::InsufficientReserve);
        }
    }
    for entry in basket.iter() {
        let per_use = aggregate::total_for(e, &basket, &entry.token);
        let needed = per_use
            .checked_mul(uses as i128)
            .unwrap_or_else(|| panic_with_error!(e, EconomyError::Overflow));
        let mut free = aggregate::free_balance(e, &entry.token);
        if let Some((token, amount)) = outgoing {
            if *token == entry.token {
                free -= amount;
            }
        }
        if free < needed {
            panic_with_error!(e, EconomyError::InsufficientReserve);
        }
    }
}

fn read_uses_left(e: &Env, item_id: u32) -> u32 {
    match e.storage().persistent().get::<_, u32>(&DataKey::UsesLeft(item_id)) {
        Some(uses) => uses,
        None => panic_with_error!(e, EconomyError::ItemNotFound),
    }
}

fn write_uses_left(e: &Env, item_id: u32, uses: u32) {
    e.storage()
        .persistent()
        .set(&DataKey::UsesLeft(item_id), &uses);
}

fn read_initial_uses(e: &Env) -> u32 {
    match e.storage().instance().get::<_, u32>(&DataKey::InitialUses) {
        Some(uses) => uses,
        None => panic_with_error!(e, EconomyError::NotInitialized),
    }
}

fn read_provided(e: &Env) -> Vec<ConsumableAmount> {
    e.storage()
        .instance()
        .get(&DataKey::Provides)
        .unwrap_or_else(|| Vec::new(e))
}

fn read_minted(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::Minted).unwrap_or(0)
}

fn read_outstanding_uses(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::OutstandingUses)
        .unwrap_or(0)
}
