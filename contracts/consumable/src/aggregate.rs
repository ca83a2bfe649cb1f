//! Multi-account consumption and pull-right provision of baskets.
//!
//! Consumption is split into a read-only planning pass and a commit pass: the
//! plan walks the accounts in order, takes what each one can give for each
//! basket entry, and only when every entry is covered are the pulls executed.

use soroban_sdk::{panic_with_error, symbol_short, Address, Env, Vec};

use crate::{
    storage::GrantKey, ComponentClient, ComponentKind, ConsumableAmount, ConsumableClient,
    EconomyError, Pull,
};

/// Asks `component` which role it plays. `None` if it does not answer.
pub fn kind_of(e: &Env, component: &Address) -> Option<ComponentKind> {
    match ComponentClient::new(e, component).try_kind() {
        Ok(Ok(kind)) => Some(kind),
        _ => None,
    }
}

/// Every entry must carry a positive amount of a consumable.
pub fn validate_basket(e: &Env, basket: &Vec<ConsumableAmount>) {
    for entry in basket.iter() {
        if entry.amount <= 0 {
            panic_with_error!(e, EconomyError::InvalidBasket);
        }
        match kind_of(e, &entry.token) {
            Some(kind) if kind.is_consumable() => {}
            _ => panic_with_error!(e, EconomyError::CapabilityMismatch),
        }
    }
}

/// Computes the pulls needed to gather `basket` from `accounts`, in order,
/// through the pull-rights they granted to `spender`. Nothing is mutated.
pub fn plan_consumption(
    e: &Env,
    spender: &Address,
    basket: &Vec<ConsumableAmount>,
    accounts: &Vec<Address>,
) -> Result<Vec<Pull>, EconomyError> {
    let mut plan = Vec::new(e);
    for entry in basket.iter() {
        if entry.amount < 0 {
            return Err(EconomyError::InvalidAmount);
        }
        let token = ConsumableClient::new(e, &entry.token);
        let mut remaining = entry.amount;
        let mut reachable_balance: i128 = 0;

        for account in accounts.iter() {
            if remaining == 0 {
                break;
            }
            let planned = planned_from(&plan, &entry.token, &account);
            let balance = token.balance(&account) - planned;
            let allowance = token.allowance(&account, spender) - planned;
            reachable_balance = reachable_balance.saturating_add(balance.max(0));

            let available = balance.min(allowance);
            if available <= 0 {
                continue;
            }
            let take = available.min(remaining);
            plan.push_back(Pull {
                token: entry.token.clone(),
                from: account,
                amount: take,
            });
            remaining -= take;
        }

        if remaining > 0 {
            if reachable_balance < entry.amount {
                return Err(EconomyError::InsufficientBalance);
            }
            return Err(EconomyError::InsufficientAllowance);
        }
    }
    Ok(plan)
}

/// Gathers `basket` from `accounts` into `recipient`, or fails without
/// moving anything.
pub fn consume(
    e: &Env,
    spender: &Address,
    basket: &Vec<ConsumableAmount>,
    accounts: &Vec<Address>,
    recipient: &Address,
) -> Vec<Pull> {
    let plan = match plan_consumption(e, spender, basket, accounts) {
        Ok(plan) => plan,
        Err(err) => panic_with_error!(e, err),
    };
    for pull in plan.iter() {
        ConsumableClient::new(e, &pull.token).transfer_from(
            spender,
            &pull.from,
            recipient,
            &pull.amount,
        );
    }
    e.events()
        .publish((symbol_short!("consumed"), recipient.clone()), plan.clone());
    plan
}

/// Grants `recipient` pull-rights on the current contract's holdings for
/// every entry of `basket`, after checking all of them are covered by stock
/// that no earlier grant still claims.
pub fn provide(e: &Env, basket: &Vec<ConsumableAmount>, recipient: &Address) {
    for entry in basket.iter() {
        if entry.amount < 0 {
            panic_with_error!(e, EconomyError::InvalidAmount);
        }
        let needed = total_for(e, basket, &entry.token);
        if free_balance(e, &entry.token) < needed {
            panic_with_error!(e, EconomyError::InsufficientReserve);
        }
    }
    for entry in basket.iter() {
        grant(e, &entry.token, recipient, entry.amount);
    }
    e.events()
        .publish((symbol_short!("provided"), recipient.clone()), basket.clone());
}

/// Lets `recipient` pull `amount` more of the current contract's `token`,
/// and remembers the grant until it is claimed.
pub fn grant(e: &Env, token: &Address, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let provider = e.current_contract_address();
    ConsumableClient::new(e, token).increase_allowance(&provider, recipient, &amount);

    let key = GrantKey::Grantees(token.clone());
    let mut grantees = e
        .storage()
        .persistent()
        .get::<_, Vec<Address>>(&key)
        .unwrap_or_else(|| Vec::new(e));
    if !grantees.contains(recipient) {
        grantees.push_back(recipient.clone());
        e.storage().persistent().set(&key, &grantees);
    }
}

/// Total of the pull-rights on `token` the current contract granted and
/// that were not claimed yet. Fully claimed grantees are forgotten.
pub fn outstanding_grants(e: &Env, token: &Address) -> i128 {
    let key = GrantKey::Grantees(token.clone());
    let Some(grantees) = e.storage().persistent().get::<_, Vec<Address>>(&key) else {
        return 0;
    };
    let provider = e.current_contract_address();
    let client = ConsumableClient::new(e, token);
    let mut open = Vec::new(e);
    let mut total: i128 = 0;
    for grantee in grantees.iter() {
        let left = client.allowance(&provider, &grantee);
        if left > 0 {
            total = total
                .checked_add(left)
                .unwrap_or_else(|| panic_with_error!(e, EconomyError::Overflow));
            open.push_back(grantee);
        }
    }
    if open.is_empty() {
        e.storage().persistent().remove(&key);
    } else if open.len() != grantees.len() {
        e.storage().persistent().set(&key, &open);
    }
    total
}

/// What the current contract holds of `token` beyond its outstanding grants.
pub fn free_balance(e: &Env, token: &Address) -> i128 {
    let held = ConsumableClient::new(e, token).balance(&e.current_contract_address());
    held - outstanding_grants(e, token)
}

/// Sum of all entries of `basket` for `token`.
pub fn total_for(e: &Env, basket: &Vec<ConsumableAmount>, token: &Address) -> i128 {
    let mut total: i128 = 0;
    for entry in basket.iter() {
        if entry.token == *token {
            total = total
                .checked_add(entry.amount)
                .unwrap_or_else(|| panic_with_error!(e, EconomyError::Overflow));
        }
    }
    total
}

fn planned_from(plan: &Vec<Pull>, token: &Address, account: &Address) -> i128 {
    let mut planned = 0;
    for pull in plan.iter() {
        if pull.token == *token && pull.from == *account {
            planned += pull.amount;
        }
    }
    planned
}
