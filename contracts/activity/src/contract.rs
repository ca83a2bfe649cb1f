use consumable::{
    aggregate, math, status, ComponentKind, ConsumableAmount, ConsumableClient, EconomyError,
};
use convertible::ConvertibleTokenClient;
use exchange::ExchangeClient;
use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Address, Env, Vec};
use stellar_macros::{only_owner, when_not_paused};

use crate::{storage::DataKey, types::ActivityKind};

#[contract]
pub struct Activity;

#[contractimpl]
impl Activity {
    /// Configures the baskets and the executor allowed to drive this
    /// activity. With `exchange` set every basket token must be a
    /// convertible registered there, and redeeming the required basket must
    /// release at least the backing the provided basket is worth.
    pub fn init(
        e: Env,
        owner: Address,
        executor: Address,
        required: Vec<ConsumableAmount>,
        provided: Vec<ConsumableAmount>,
        exchange: Option<Address>,
    ) {
        status::init_owner(&e, &owner);
        aggregate::validate_basket(&e, &required);
        aggregate::validate_basket(&e, &provided);

        let (mode, profit) = match exchange {
            Some(exchange) => {
                if aggregate::kind_of(&e, &exchange) != Some(ComponentKind::Exchange) {
                    panic_with_error!(&e, EconomyError::CapabilityMismatch);
                }
                let profit = backing_value(&e, &exchange, &required)
                    .checked_sub(backing_value(&e, &exchange, &provided))
                    .unwrap_or_else(|| panic_with_error!(&e, EconomyError::Overflow));
                if profit < 0 {
                    panic_with_error!(&e, EconomyError::UnsustainableExchange);
                }
                (ActivityKind::Exchanging(exchange), profit)
            }
            None => (ActivityKind::Basic, 0),
        };

        e.storage().instance().set(&DataKey::Executor, &executor);
        e.storage().instance().set(&DataKey::Required, &required);
        e.storage().instance().set(&DataKey::Provided, &provided);
        e.storage().instance().set(&DataKey::Mode, &mode);
        e.storage().instance().set(&DataKey::Profit, &profit);
        e.storage().instance().set(&DataKey::TotalExecuted, &0u32);
    }

    pub fn kind(_e: Env) -> ComponentKind {
        ComponentKind::Activity
    }

    pub fn activity_kind(e: Env) -> ActivityKind {
        read_mode(&e)
    }

    pub fn executor(e: Env) -> Address {
        read_executor(&e)
    }

    pub fn required_consumables(e: Env) -> Vec<ConsumableAmount> {
        read_basket(&e, &DataKey::Required)
    }

    pub fn provided_consumables(e: Env) -> Vec<ConsumableAmount> {
        read_basket(&e, &DataKey::Provided)
    }

    /// Configured margin, in exchange tokens, between the intrinsic value of
    /// the required basket and that of the provided one. Zero for a basic
    /// activity.
    pub fn exchange_profit(e: Env) -> i128 {
        e.storage().instance().get(&DataKey::Profit).unwrap_or(0)
    }

    pub fn executed_by(e: Env, player: Address) -> u32 {
        read_executed_by(&e, &player)
    }

    pub fn total_executed(e: Env) -> u32 {
        read_total_executed(&e)
    }

    /// Runs between consumption and provision. The required basket is
    /// already held by the activity.
    #[when_not_paused]
    pub fn on_execute(e: Env, player: Address) {
        require_executor(&e);

        let exchange = match read_mode(&e) {
            ActivityKind::Basic => return,
            ActivityKind::Exchanging(exchange) => exchange,
        };
        let this = e.current_contract_address();
        let backing = ConsumableClient::new(&e, &exchange);

        let mut released_total: i128 = 0;
        for entry in read_basket(&e, &DataKey::Required).iter() {
            let released =
                ConvertibleTokenClient::new(&e, &entry.token).burn_by_exchange(&this, &entry.amount);
            if released > 0 {
                backing.transfer_from(&this, &entry.token, &this, &released);
                released_total += released;
            }
        }

        let mut spent_total: i128 = 0;
        for entry in read_basket(&e, &DataKey::Provided).iter() {
            let convertible = ConvertibleTokenClient::new(&e, &entry.token);
            let needed = convertible.amount_exchange_token_needed(&entry.amount);
            backing.increase_allowance(&this, &entry.token, &needed);
            convertible.mint_by_exchange(&this, &entry.amount);
            spent_total += needed;
        }

        e.events().publish(
            (symbol_short!("converted"), player),
            (released_total, spent_total),
        );
    }

    /// Hands the provided basket to `player` and counts the execution.
    /// Returns how many times `player` has now completed this activity.
    #[when_not_paused]
    pub fn complete(e: Env, player: Address) -> u32 {
        require_executor(&e);

        aggregate::provide(&e, &read_basket(&e, &DataKey::Provided), &player);

        let executed = read_executed_by(&e, &player)
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(&e, EconomyError::Overflow));
        let total = read_total_executed(&e)
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(&e, EconomyError::Overflow));
        e.storage()
            .persistent()
            .set(&DataKey::ExecutedBy(player.clone()), &executed);
        e.storage().instance().set(&DataKey::TotalExecuted, &total);

        e.events()
            .publish((symbol_short!("executed"), player), (executed, total));
        executed
    }

    /// Moves stock or backing held by the activity. What players were
    /// granted and have not claimed yet stays.
    #[only_owner]
    pub fn transfer_token(e: Env, token: Address, to: Address, amount: i128) {
        if amount < 0 {
            panic_with_error!(&e, EconomyError::InvalidAmount);
        }
        if aggregate::free_balance(&e, &token) < amount {
            panic_with_error!(&e, EconomyError::InsufficientReserve);
        }
        ConsumableClient::new(&e, &token).transfer(&e.current_contract_address(), &to, &amount);
        e.events()
            .publish((symbol_short!("sweep"), token, to), amount);
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

/// Backing released by redeeming every entry of `basket` on its own.
fn backing_value(e: &Env, exchange: &Address, basket: &Vec<ConsumableAmount>) -> i128 {
    let client = ExchangeClient::new(e, exchange);
    let mut value: i128 = 0;
    for entry in basket.iter() {
        if !client.is_registered(&entry.token) {
            panic_with_error!(e, EconomyError::NotRegistered);
        }
        let rate = client.exchange_rate(&entry.token);
        value = value
            .checked_add(math::floor_div(entry.amount, rate.intrinsic_value))
            .unwrap_or_else(|| panic_with_error!(e, EconomyError::Overflow));
    }
    value
}

fn require_executor(e: &Env) {
    read_executor(e).require_auth();
}

fn read_executor(e: &Env) -> Address {
    match e.storage().instance().get::<_, Address>(&DataKey::Executor) {
        Some(executor) => executor,
        None => panic_with_error!(e, EconomyError::NotInitialized),
    }
}

fn read_mode(e: &Env) -> ActivityKind {
    match e.storage().instance().get::<_, ActivityKind>(&DataKey::Mode) {
        Some(mode) => mode,
        None => panic_with_error!(e, EconomyError::NotInitialized),
    }
}

fn read_basket(e: &Env, key: &DataKey) -> Vec<ConsumableAmount> {
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| Vec::new(e))
}

fn read_executed_by(e: &Env, player: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::ExecutedBy(player.clone()))
        .unwrap_or(0)
}

fn read_total_executed(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::TotalExecuted)
        .unwrap_or(0)
}
