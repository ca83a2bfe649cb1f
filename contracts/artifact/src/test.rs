extern crate std;

use consumable::{ConsumableAmount, EconomyError};
use consumable_token::{ConsumableToken, ConsumableTokenClient};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Error, String, Vec};
use stellar_contract_utils::pausable::PausableError;

use crate::{Artifact, ArtifactClient};

struct Setup<'a> {
    owner: Address,
    gold: ConsumableTokenClient<'a>,
    artifact: ArtifactClient<'a>,
}

fn create_token<'a>(e: &Env, owner: &Address) -> ConsumableTokenClient<'a> {
    let token = ConsumableTokenClient::new(e, &e.register(ConsumableToken, ()));
    token.init(
        owner,
        &String::from_str(e, "Gold"),
        &String::from_str(e, "GLD"),
        &0,
        &false,
    );
    token
}

fn create_artifact<'a>(
    e: &Env,
    owner: &Address,
    initial_uses: u32,
    provided: &Vec<ConsumableAmount>,
) -> ArtifactClient<'a> {
    let artifact = ArtifactClient::new(e, &e.register(Artifact, ()));
    artifact.init(
        owner,
        &String::from_str(e, "Potion"),
        &String::from_str(e, "POT"),
        &initial_uses,
        provided,
    );
    artifact
}

/// A three-use artifact handing out 10 gold per use, stocked with `stock`.
fn setup<'a>(e: &Env, stock: i128) -> Setup<'a> {
    e.mock_all_auths();
    let owner = Address::generate(e);
    let gold = create_token(e, &owner);
    let provided = vec![
        e,
        ConsumableAmount {
            token: gold.address.clone(),
            amount: 10,
        },
    ];
    let artifact = create_artifact(e, &owner, 3, &provided);
    gold.mint(&artifact.address, &stock);
    Setup {
        owner,
        gold,
        artifact,
    }
}

fn assert_failed_with<T, I>(result: Result<T, Result<Error, I>>, expected: impl Into<Error>) {
    let expected: Error = expected.into();
    match result {
        Err(Ok(err)) => assert_eq!(err, expected),
        _ => panic!("expected {:?}", expected),
    }
}

#[test]
fn minting_needs_stock_for_every_outstanding_use() {
    let e = Env::default();
    let s = setup(&e, 50);
    let alice = Address::generate(&e);

    let first = s.artifact.mint(&alice);
    assert_failed_with(
        s.artifact.try_mint(&alice),
        EconomyError::InsufficientReserve,
    );
    assert_eq!(s.artifact.total_items(), 1);

    s.gold.mint(&s.artifact.address, &10);
    let second = s.artifact.mint(&alice);
    assert_eq!(second, first + 1);
    assert_eq!(s.artifact.total_items(), 2);
    assert_eq!(s.artifact.total_uses_left(), 6);
    assert_eq!(s.artifact.balance_of(&alice), 2);
    assert_eq!(s.artifact.owner_of(&second), alice);
}

#[test]
fn item_is_usable_exactly_initial_uses_times() {
    let e = Env::default();
    let s = setup(&e, 30);
    let alice = Address::generate(&e);
    let item = s.artifact.mint(&alice);

    for _ in 0..3 {
        s.artifact.use_item(&alice, &item, &alice);
    }
    assert_eq!(s.artifact.uses_left(&item), 0);
    assert_eq!(s.gold.allowance(&s.artifact.address, &alice), 30);

    assert_failed_with(
        s.artifact.try_use_item(&alice, &item, &alice),
        EconomyError::InsufficientUses,
    );
    assert_eq!(s.artifact.uses_left(&item), 0);
    assert_eq!(s.artifact.total_uses_left(), 0);
    assert_eq!(s.artifact.owner_of(&item), alice);

    s.gold
        .transfer_from(&alice, &s.artifact.address, &alice, &30);
    assert_eq!(s.gold.balance(&alice), 30);
}

#[test]
fn uses_can_target_another_account() {
    let e = Env::default();
    let s = setup(&e, 30);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let item = s.artifact.mint(&alice);

    s.artifact.use_item(&alice, &item, &bob);

    assert_eq!(s.gold.allowance(&s.artifact.address, &bob), 10);
    assert_eq!(s.gold.allowance(&s.artifact.address, &alice), 0);
    assert_eq!(s.artifact.uses_left(&item), 2);
}

#[test]
fn only_the_holder_can_use_an_item() {
    let e = Env::default();
    let s = setup(&e, 30);
    let alice = Address::generate(&e);
    let mallory = Address::generate(&e);
    let item = s.artifact.mint(&alice);

    assert_failed_with(
        s.artifact.try_use_item(&mallory, &item, &mallory),
        EconomyError::NotOwner,
    );
    assert_failed_with(
        s.artifact.try_use_item(&alice, &(item + 9), &alice),
        EconomyError::ItemNotFound,
    );
    assert_eq!(s.artifact.uses_left(&item), 3);
}

#[test]
fn transferred_items_keep_their_uses() {
    let e = Env::default();
    let s = setup(&e, 30);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let item = s.artifact.mint(&alice);

    s.artifact.use_item(&alice, &item, &alice);
    s.artifact.transfer(&alice, &bob, &item);

    assert_eq!(s.artifact.owner_of(&item), bob);
    assert_eq!(s.artifact.balance_of(&alice), 0);
    assert_eq!(s.artifact.balance_of(&bob), 1);
    assert_eq!(s.artifact.uses_left(&item), 2);
    assert_failed_with(
        s.artifact.try_use_item(&alice, &item, &alice),
        EconomyError::NotOwner,
    );
    s.artifact.use_item(&bob, &item, &bob);
    assert_eq!(s.artifact.uses_left(&item), 1);
}

#[test]
fn sweeping_leaves_stock_for_outstanding_uses() {
    let e = Env::default();
    let s = setup(&e, 50);
    let alice = Address::generate(&e);
    s.artifact.mint(&alice);

    assert_failed_with(
        s.artifact
            .try_transfer_token(&s.gold.address, &s.owner, &21),
        EconomyError::InsufficientReserve,
    );
    s.artifact.transfer_token(&s.gold.address, &s.owner, &20);

    assert_eq!(s.gold.balance(&s.owner), 20);
    assert_eq!(s.gold.balance(&s.artifact.address), 30);
}

#[test]
fn unclaimed_use_grants_stay_reserved() {
    let e = Env::default();
    let s = setup(&e, 30);
    let alice = Address::generate(&e);
    let item = s.artifact.mint(&alice);
    for _ in 0..3 {
        s.artifact.use_item(&alice, &item, &alice);
    }
    assert_eq!(s.artifact.total_uses_left(), 0);
    assert_eq!(s.gold.balance(&s.artifact.address), 30);

    assert_failed_with(
        s.artifact
            .try_transfer_token(&s.gold.address, &s.owner, &1),
        EconomyError::InsufficientReserve,
    );
    s.gold.mint(&s.artifact.address, &20);
    assert_failed_with(
        s.artifact.try_mint(&alice),
        EconomyError::InsufficientReserve,
    );

    s.gold
        .transfer_from(&alice, &s.artifact.address, &alice, &30);
    assert_eq!(s.gold.balance(&alice), 30);
    s.gold.mint(&s.artifact.address, &10);
    s.artifact.mint(&alice);
    assert_eq!(s.artifact.total_uses_left(), 3);
}

#[test]
fn init_validates_uses_and_basket() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let gold = create_token(&e, &owner);
    let not_a_token = create_artifact(&e, &owner, 1, &Vec::new(&e));

    let candidate = ArtifactClient::new(&e, &e.register(Artifact, ()));
    let name = String::from_str(&e, "Potion");
    let symbol = String::from_str(&e, "POT");

    let good = vec![
        &e,
        ConsumableAmount {
            token: gold.address.clone(),
            amount: 10,
        },
    ];
    assert_failed_with(
        candidate.try_init(&owner, &name, &symbol, &0, &good),
        EconomyError::InvalidAmount,
    );

    let empty_entry = vec![
        &e,
        ConsumableAmount {
            token: gold.address.clone(),
            amount: 0,
        },
    ];
    assert_failed_with(
        candidate.try_init(&owner, &name, &symbol, &1, &empty_entry),
        EconomyError::InvalidBasket,
    );

    let wrong_kind = vec![
        &e,
        ConsumableAmount {
            token: not_a_token.address.clone(),
            amount: 1,
        },
    ];
    assert_failed_with(
        candidate.try_init(&owner, &name, &symbol, &1, &wrong_kind),
        EconomyError::CapabilityMismatch,
    );

    candidate.init(&owner, &name, &symbol, &1, &good);
    assert_failed_with(
        candidate.try_init(&owner, &name, &symbol, &1, &good),
        EconomyError::AlreadyInitialized,
    );
    assert_eq!(candidate.provided_consumables(), good);
    assert_eq!(candidate.initial_uses(), 1);
}

#[test]
fn disabled_artifact_rejects_uses() {
    let e = Env::default();
    let s = setup(&e, 30);
    let alice = Address::generate(&e);
    let item = s.artifact.mint(&alice);

    s.artifact.disable();
    assert!(!s.artifact.is_enabled());
    assert_failed_with(
        s.artifact.try_use_item(&alice, &item, &alice),
        PausableError::EnforcedPause,
    );

    s.artifact.enable();
    s.artifact.use_item(&alice, &item, &alice);
    assert_eq!(s.artifact.uses_left(&item), 2);
}
