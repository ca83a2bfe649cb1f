use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    ExchangeToken,
    Rates,
    Prepaid,
}
