use soroban_sdk::{contracttype, Address};

/// How an activity turns what it consumes into what it provides.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ActivityKind {
    /// Provides out of its own stock.
    Basic,
    /// Redeems the required convertibles into the exchange's backing and
    /// issues the provided ones out of it.
    Exchanging(Address),
}
