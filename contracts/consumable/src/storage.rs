use soroban_sdk::{contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub enum LedgerKey {
    Limited,
    Limit(Address),
}

/// Accounts holding pull-rights granted by this contract, per token.
#[derive(Clone)]
#[contracttype]
pub enum GrantKey {
    Grantees(Address),
}
