use soroban_sdk::{contracttype, Address, String};

/// One `{token, amount}` entry of a basket.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ConsumableAmount {
    pub token: Address,
    pub amount: i128,
}

/// The role a referenced contract plays in the economy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum ComponentKind {
    Consumable = 0,
    Exchange = 1,
    Convertible = 2,
    Artifact = 3,
    Activity = 4,
}

impl ComponentKind {
    /// Exchanges and convertibles are tokens too.
    pub fn is_consumable(&self) -> bool {
        matches!(
            self,
            ComponentKind::Consumable | ComponentKind::Exchange | ComponentKind::Convertible
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// A single debit leg of a consumption plan.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Pull {
    pub token: Address,
    pub from: Address,
    pub amount: i128,
}
