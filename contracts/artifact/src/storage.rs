use soroban_sdk::contracttype;

/// Ownership and holdings live in the non-fungible base; only the per-item
/// uses and the artifact's configuration are kept here.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    InitialUses,
    Provides,
    Minted,
    OutstandingUses,
    UsesLeft(u32),
}
