use consumable::{base, math, status, ComponentKind, ConsumableClient, EconomyError};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, Env, String, Vec,
};
use stellar_macros::{only_owner, when_not_paused};

use crate::{hooks::ExchangeableClient, storage::DataKey, types::ExchangeRate};

#[contract]
pub struct Exchange;

#[contractimpl]
impl Exchange {
    pub fn init(e: Env, owner: Address, name: String, symbol: String, decimals: u32) {
        status::init_owner(&e, &owner);
        base::init_metadata(&e, name, symbol, decimals);
        e.storage()
            .instance()
            .set(&DataKey::Convertibles, &Vec::<Address>::new(&e));
    }

    pub fn kind(_e: Env) -> ComponentKind {
        ComponentKind::Exchange
    }

    /// Registers the calling convertible with its rates. Only the convertible
    /// itself can register, and only once.
    pub fn register_token(e: Env, token: Address, purchase_price: i128, intrinsic_value: i128) {
        token.require_auth();
        let rate = ExchangeRate {
            purchase_price,
            intrinsic_value,
        };
        if !rate.is_valid() {
            panic_with_error!(&e, EconomyError::InvalidRate);
        }
        if e.storage().instance().has(&DataKey::Rate(token.clone())) {
            panic_with_error!(&e, EconomyError::AlreadyRegistered);
        }

        let mut convertibles = read_convertibles(&e);
        convertibles.push_back(token.clone());
        e.storage()
            .instance()
            .set(&DataKey::Convertibles, &convertibles);
        e.storage()
            .instance()
            .set(&DataKey::Rate(token.clone()), &rate);

        e.events()
            .publish((symbol_short!("register"), token), rate);
    }

    pub fn convertible_count(e: Env) -> u32 {
        read_convertibles(&e).len()
    }

    pub fn convertible_at(e: Env, index: u32) -> Address {
        match read_convertibles(&e).get(index) {
            Some(token) => token,
            None => panic_with_error!(&e, EconomyError::IndexOutOfBounds),
        }
    }

    pub fn convertibles(e: Env) -> Vec<Address> {
        read_convertibles(&e)
    }

    pub fn is_registered(e: Env, token: Address) -> bool {
        e.storage().instance().has(&DataKey::Rate(token))
    }

    pub fn exchange_rate(e: Env, token: Address) -> ExchangeRate {
        read_rate_or_panic(&e, &token)
    }

    /// Moves `amount` exchange tokens from `caller` into `token`'s backing and
    /// returns the convertible amount `caller` may now pull from the
    /// exchange. Nothing is issued until `caller` claims it.
    #[when_not_paused]
    pub fn exchange_to(e: Env, caller: Address, token: Address, amount: i128) -> i128 {
        caller.require_auth();
        if amount <= 0 {
            panic_with_error!(&e, EconomyError::InvalidAmount);
        }
        let rate = read_rate_or_panic(&e, &token);
        let issued = amount
            .checked_mul(rate.purchase_price)
            .unwrap_or_else(|| panic_with_error!(&e, EconomyError::Overflow));

        base::transfer(&e, &caller, &token, amount);
        ExchangeableClient::new(&e, &token).exchange_grant(&caller, &issued);

        e.events().publish(
            (symbol_short!("exch_to"), caller, token),
            (amount, issued),
        );
        issued
    }

    /// Burns `amount` of `token` held by `caller`, through the pull-right
    /// `caller` gave the exchange, and pays out the backing it is worth at
    /// the intrinsic rate, rounded down.
    #[when_not_paused]
    pub fn exchange_from(e: Env, caller: Address, token: Address, amount: i128) -> i128 {
        caller.require_auth();
        if amount <= 0 {
            panic_with_error!(&e, EconomyError::InvalidAmount);
        }
        let rate = read_rate_or_panic(&e, &token);
        let released = math::floor_div(amount, rate.intrinsic_value);
        if base::balance(&e, &token) < released {
            panic_with_error!(&e, EconomyError::InsufficientReserve);
        }

        let this = e.current_contract_address();
        ConsumableClient::new(&e, &token).burn_from(&this, &caller, &amount);
        base::transfer(&e, &token, &caller, released);

        e.events().publish(
            (symbol_short!("exch_from"), caller, token),
            (amount, released),
        );
        released
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

fn read_convertibles(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get::<_, Vec<Address>>(&DataKey::Convertibles)
        .unwrap_or_else(|| Vec::new(e))
}

fn read_rate_or_panic(e: &Env, token: &Address) -> ExchangeRate {
    match e
        .storage()
        .instance()
        .get::<_, ExchangeRate>(&DataKey::Rate(token.clone()))
    {
        Some(rate) => rate,
        None => panic_with_error!(e, EconomyError::NotRegistered),
    }
}
