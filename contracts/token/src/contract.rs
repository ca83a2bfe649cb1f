use consumable::{base, status, ComponentKind};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use stellar_macros::{only_owner, when_not_paused};

#[contract]
pub struct ConsumableToken;

#[contractimpl]
impl ConsumableToken {
    pub fn init(
        e: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        limited: bool,
    ) {
        status::init_owner(&e, &owner);
        base::init_metadata(&e, name, symbol, decimals);
        if limited {
            base::enable_limits(&e);
        }
    }

    pub fn kind(_e: Env) -> ComponentKind {
        ComponentKind::Consumable
    }

    pub fn name(e: Env) -> String {
        base::metadata(&e).name
    }

    pub fn symbol(e: Env) -> String {
        base::metadata(&e).symbol
    }

    pub fn decimals(e: Env) -> u32 {
        base::metadata(&e).decimals
    }

    pub fn total_supply(e: Env) -> i128 {
        base::total_supply(&e)
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        base::balance(&e, &id)
    }

    pub fn allowance(e: Env, owner: Address, spender: Address) -> i128 {
        base::allowance(&e, &owner, &spender)
    }

    pub fn approve(e: Env, owner: Address, spender: Address, amount: i128) {
        owner.require_auth();
        base::approve(&e, &owner, &spender, amount);
    }

    pub fn increase_allowance(e: Env, owner: Address, spender: Address, amount: i128) {
        owner.require_auth();
        base::increase_allowance(&e, &owner, &spender, amount);
    }

    pub fn decrease_allowance(e: Env, owner: Address, spender: Address, amount: i128) {
        owner.require_auth();
        base::decrease_allowance(&e, &owner, &spender, amount);
    }

    #[when_not_paused]
    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        base::transfer(&e, &from, &to, amount);
    }

    #[when_not_paused]
    pub fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        base::spend_allowance(&e, &from, &spender, amount);
        base::transfer(&e, &from, &to, amount);
    }

    #[when_not_paused]
    pub fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        base::burn(&e, &from, amount);
    }

    #[when_not_paused]
    pub fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        base::spend_allowance(&e, &from, &spender, amount);
        base::burn(&e, &from, amount);
    }

    #[only_owner]
    #[when_not_paused]
    pub fn mint(e: Env, to: Address, amount: i128) {
        base::mint(&e, &to, amount);
    }

    /// Destroys `amount` held by `from` on the owner's authority alone.
    #[only_owner]
    #[when_not_paused]
    pub fn admin_burn(e: Env, from: Address, amount: i128) {
        base::burn(&e, &from, amount);
    }

    #[only_owner]
    pub fn set_limit(e: Env, account: Address, limit: i128) {
        base::set_limit(&e, &account, limit);
    }

    pub fn limit_of(e: Env, account: Address) -> Option<i128> {
        base::limit_of(&e, &account)
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
