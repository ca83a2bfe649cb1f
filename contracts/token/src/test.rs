extern crate std;

use consumable::EconomyError;
use soroban_sdk::{testutils::Address as _, Address, Env, Error, String};
use stellar_contract_utils::pausable::PausableError;

use crate::{ConsumableToken, ConsumableTokenClient};

fn create_token<'a>(e: &Env, owner: &Address, limited: bool) -> ConsumableTokenClient<'a> {
    let token = ConsumableTokenClient::new(e, &e.register(ConsumableToken, ()));
    token.init(
        owner,
        &String::from_str(e, "Gold"),
        &String::from_str(e, "GLD"),
        &0,
        &limited,
    );
    token
}

fn assert_failed_with<T, I>(result: Result<T, Result<Error, I>>, expected: impl Into<Error>) {
    let expected: Error = expected.into();
    match result {
        Err(Ok(err)) => assert_eq!(err, expected),
        _ => panic!("expected {:?}", expected),
    }
}

#[test]
fn mint_and_transfer_keep_supply_in_balances() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let token = create_token(&e, &owner, false);

    token.mint(&alice, &1000);
    token.transfer(&alice, &bob, &300);
    token.burn(&bob, &100);

    assert_eq!(token.balance(&alice), 700);
    assert_eq!(token.balance(&bob), 200);
    assert_eq!(token.total_supply(), token.balance(&alice) + token.balance(&bob));
    assert_eq!(token.name(), String::from_str(&e, "Gold"));
    assert_eq!(token.decimals(), 0);
    assert_eq!(token.owner(), owner);
}

#[test]
fn pull_rights_are_capped_and_consumed() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let spender = Address::generate(&e);
    let bob = Address::generate(&e);
    let token = create_token(&e, &owner, false);

    token.mint(&alice, &100);
    token.approve(&alice, &spender, &40);
    token.increase_allowance(&alice, &spender, &10);
    token.decrease_allowance(&alice, &spender, &20);
    assert_eq!(token.allowance(&alice, &spender), 30);

    token.transfer_from(&spender, &alice, &bob, &25);
    assert_eq!(token.allowance(&alice, &spender), 5);
    assert_eq!(token.balance(&bob), 25);

    assert_failed_with(
        token.try_transfer_from(&spender, &alice, &bob, &6),
        EconomyError::InsufficientAllowance,
    );
    assert_failed_with(
        token.try_decrease_allowance(&alice, &spender, &6),
        EconomyError::InsufficientAllowance,
    );

    token.burn_from(&spender, &alice, &5);
    assert_eq!(token.balance(&alice), 70);
    assert_eq!(token.total_supply(), 95);
}

#[test]
fn overdrawn_transfer_names_the_balance_leg() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let token = create_token(&e, &owner, false);

    token.mint(&alice, &10);
    assert_failed_with(
        token.try_transfer(&alice, &bob, &11),
        EconomyError::InsufficientBalance,
    );
    assert_failed_with(
        token.try_transfer(&alice, &bob, &-1),
        EconomyError::InvalidAmount,
    );
    assert_eq!(token.balance(&alice), 10);
    assert_eq!(token.balance(&bob), 0);
}

#[test]
fn owner_burns_without_the_holders_consent() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let token = create_token(&e, &owner, false);
    token.mint(&alice, &50);

    token.admin_burn(&alice, &20);
    assert_eq!(token.balance(&alice), 30);
    assert_eq!(token.total_supply(), 30);

    assert_failed_with(
        token.try_admin_burn(&alice, &31),
        EconomyError::InsufficientBalance,
    );
    assert_eq!(token.total_supply(), 30);
}

#[test]
#[should_panic]
fn admin_burn_requires_owner_authorization() {
    let e = Env::default();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let token = create_token(&e, &owner, false);
    e.mock_all_auths();
    token.mint(&alice, &10);
    e.set_auths(&[]);
    token.admin_burn(&alice, &10);
}

#[test]
fn limit_policy_caps_receiving_accounts() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let token = create_token(&e, &owner, true);

    token.set_limit(&bob, &50);
    assert_eq!(token.limit_of(&bob), Some(50));
    assert_eq!(token.limit_of(&alice), None);

    token.mint(&alice, &100);
    token.mint(&bob, &30);
    token.transfer(&alice, &bob, &20);
    assert_eq!(token.balance(&bob), 50);

    assert_failed_with(
        token.try_transfer(&alice, &bob, &1),
        EconomyError::LimitExceeded,
    );
    assert_failed_with(token.try_mint(&bob, &1), EconomyError::LimitExceeded);
    assert_eq!(token.balance(&alice), 80);
    assert_eq!(token.total_supply(), 130);
}

#[test]
fn limits_are_ignored_without_the_policy() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let bob = Address::generate(&e);
    let token = create_token(&e, &owner, false);

    token.set_limit(&bob, &5);
    token.mint(&bob, &100);
    assert_eq!(token.balance(&bob), 100);
}

#[test]
fn disabled_token_rejects_balance_changes() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let token = create_token(&e, &owner, false);
    token.mint(&alice, &10);

    token.disable();
    assert!(!token.is_enabled());
    assert_failed_with(
        token.try_transfer(&alice, &bob, &1),
        PausableError::EnforcedPause,
    );
    assert_failed_with(token.try_mint(&alice, &1), PausableError::EnforcedPause);
    assert_failed_with(
        token.try_admin_burn(&alice, &1),
        PausableError::EnforcedPause,
    );

    token.enable();
    token.transfer(&alice, &bob, &1);
    assert_eq!(token.balance(&bob), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn init_runs_once() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let token = create_token(&e, &owner, false);
    token.init(
        &owner,
        &String::from_str(&e, "Again"),
        &String::from_str(&e, "AGN"),
        &0,
        &false,
    );
}

#[test]
#[should_panic]
fn mint_requires_owner_authorization() {
    let e = Env::default();
    let owner = Address::generate(&e);
    let alice = Address::generate(&e);
    let token = create_token(&e, &owner, false);
    token.mint(&alice, &10);
}
