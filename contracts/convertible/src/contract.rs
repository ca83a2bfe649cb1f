use consumable::{aggregate, base, math, status, ComponentKind, ConsumableClient, EconomyError};
use exchange::{ExchangeClient, ExchangeRate};
use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Address, Env, String};
use stellar_macros::{only_owner, when_not_paused};

use crate::storage::DataKey;

#[contract]
pub struct ConvertibleToken;

#[contractimpl]
impl ConvertibleToken {
    pub fn init(
        e: Env,
        owner: Address,
        exchange_token: Address,
        name: String,
        symbol: String,
        decimals: u32,
        purchase_price: i128,
        intrinsic_value: i128,
    ) {
        let rates = ExchangeRate {
            purchase_price,
            intrinsic_value,
        };
        if !rates.is_valid() {
            panic_with_error!(&e, EconomyError::InvalidRate);
        }
        status::init_owner(&e, &owner);
        base::init_metadata(&e, name, symbol, decimals);
        e.storage()
            .instance()
            .set(&DataKey::ExchangeToken, &exchange_token);
        e.storage().instance().set(&DataKey::Rates, &rates);
    }

    pub fn kind(_e: Env) -> ComponentKind {
        ComponentKind::Convertible
    }

    /// Registers this token and its rates with the exchange. The exchange
    /// rejects a second registration.
    #[only_owner]
    pub fn register_with_exchange(e: Env) {
        let rates = read_rates(&e);
        ExchangeClient::new(&e, &read_exchange_token(&e)).register_token(
            &e.current_contract_address(),
            &rates.purchase_price,
            &rates.intrinsic_value,
        );
    }

    pub fn exchange_token(e: Env) -> Address {
        read_exchange_token(&e)
    }

    pub fn purchase_price_exchange_rate(e: Env) -> i128 {
        read_rates(&e).purchase_price
    }

    pub fn intrinsic_value_exchange_rate(e: Env) -> i128 {
        read_rates(&e).intrinsic_value
    }

    /// Backing held by this token.
    pub fn reserve(e: Env) -> i128 {
        backing(&e).balance(&e.current_contract_address())
    }

    pub fn amount_exchange_token_needed(e: Env, amount: i128) -> i128 {
        base::require_non_negative(&e, amount);
        math::ceil_div(amount, read_rates(&e).purchase_price)
    }

    pub fn amount_exchange_token_provided(e: Env, amount: i128) -> i128 {
        base::require_non_negative(&e, amount);
        math::floor_div(amount, read_rates(&e).intrinsic_value)
    }

    /// Pulls the backing for `amount` from `caller` and mints it to them.
    #[when_not_paused]
    pub fn mint_by_exchange(e: Env, caller: Address, amount: i128) {
        caller.require_auth();
        if amount <= 0 {
            panic_with_error!(&e, EconomyError::InvalidAmount);
        }
        issue_against_backing(&e, &caller, amount);
    }

    /// Lets `recipient` pull `amount` from the exchange's account. The exchange
    /// has already paid the backing in, so the amount is issued on claim
    /// without pulling backing again.
    #[when_not_paused]
    pub fn exchange_grant(e: Env, recipient: Address, amount: i128) {
        let exchange = read_exchange_token(&e);
        exchange.require_auth();
        base::increase_allowance(&e, &exchange, &recipient, amount);
        let prepaid = read_prepaid(&e)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&e, EconomyError::Overflow));
        write_prepaid(&e, prepaid);
    }

    /// Amount granted by the exchange whose backing is held but which nobody
    /// claimed yet.
    pub fn prepaid_supply(e: Env) -> i128 {
        read_prepaid(&e)
    }

    /// Burns `amount` from `caller` and lets them pull the backing it
    /// releases. Returns the released backing, which stays reserved for
    /// `caller` until claimed.
    #[when_not_paused]
    pub fn burn_by_exchange(e: Env, caller: Address, amount: i128) -> i128 {
        caller.require_auth();
        if amount <= 0 {
            panic_with_error!(&e, EconomyError::InvalidAmount);
        }
        base::burn(&e, &caller, amount);

        let released = math::floor_div(amount, read_rates(&e).intrinsic_value);
        aggregate::grant(&e, &read_exchange_token(&e), &caller, released);
        e.events()
            .publish((symbol_short!("redeem"), caller), (amount, released));
        released
    }

    /// Sweeps `amount` of `token` held by this contract to `to`. Backing can
    /// only leave while the rest still redeems the whole issued supply, the
    /// prepaid supply once claimed, and every unclaimed redemption.
    #[only_owner]
    pub fn transfer_token(e: Env, token: Address, to: Address, amount: i128) {
        base::require_non_negative(&e, amount);
        let this = e.current_contract_address();

        if token == read_exchange_token(&e) {
            let reserve = backing(&e).balance(&this);
            if reserve < amount {
                panic_with_error!(&e, EconomyError::InsufficientReserve);
            }
            let remaining = reserve - amount;
            let issuable = base::total_supply(&e)
                .checked_add(read_prepaid(&e))
                .unwrap_or_else(|| panic_with_error!(&e, EconomyError::Overflow));
            let owed = math::floor_div(issuable, read_rates(&e).intrinsic_value)
                + aggregate::outstanding_grants(&e, &token);
            if remaining < owed {
                panic_with_error!(&e, EconomyError::Insolvent);
            }
        }
        ConsumableClient::new(&e, &token).transfer(&this, &to, &amount);
        e.events()
            .publish((symbol_short!("sweep"), token, to), amount);
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
        base::require_non_negative(&e, amount);
        cover_shortfall(&e, &from, amount);
        base::transfer(&e, &from, &to, amount);
    }

    #[when_not_paused]
    pub fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        base::spend_allowance(&e, &from, &spender, amount);
        cover_shortfall(&e, &from, amount);
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

/// Mints whatever `from` lacks to send `amount`. The exchange draws on its
/// prepaid supply; anyone else pays from the backing allowance they granted
/// this token.
fn cover_shortfall(e: &Env, from: &Address, amount: i128) {
    let held = base::balance(e, from);
    if held >= amount {
        return;
    }
    let shortfall = amount - held;
    if *from == read_exchange_token(e) {
        issue_prepaid(e, from, shortfall);
        return;
    }
    let needed = math::ceil_div(shortfall, read_rates(e).purchase_price);
    if backing(e).allowance(from, &e.current_contract_address()) < needed {
        panic_with_error!(e, EconomyError::InsufficientAllowance);
    }
    issue_against_backing(e, from, shortfall);
}

fn issue_against_backing(e: &Env, account: &Address, amount: i128) {
    let this = e.current_contract_address();
    let needed = math::ceil_div(amount, read_rates(e).purchase_price);
    backing(e).transfer_from(&this, account, &this, &needed);
    base::mint(e, account, amount);
    e.events()
        .publish((symbol_short!("issue"), account.clone()), (amount, needed));
}

fn issue_prepaid(e: &Env, exchange: &Address, amount: i128) {
    let prepaid = read_prepaid(e);
    if prepaid < amount {
        panic_with_error!(e, EconomyError::InsufficientReserve);
    }
    write_prepaid(e, prepaid - amount);
    base::mint(e, exchange, amount);
}

fn backing(e: &Env) -> ConsumableClient<'_> {
    ConsumableClient::new(e, &read_exchange_token(e))
}

fn read_exchange_token(e: &Env) -> Address {
    match e
        .storage()
        .instance()
        .get::<_, Address>(&DataKey::ExchangeToken)
    {
        Some(exchange) => exchange,
        None => panic_with_error!(e, EconomyError::NotInitialized),
    }
}

fn read_rates(e: &Env) -> ExchangeRate {
    match e.storage().instance().get::<_, ExchangeRate>(&DataKey::Rates) {
        Some(rates) => rates,
        None => panic_with_error!(e, EconomyError::NotInitialized),
    }
}

fn read_prepaid(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Prepaid).unwrap_or(0)
}

fn write_prepaid(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::Prepaid, &amount);
}
