use soroban_sdk::{contractclient, Address, Env};

/// Entry point a convertible exposes to the exchange it is registered with.
#[allow(dead_code)]
#[contractclient(name = "ExchangeableClient")]
pub trait ExchangeableInterface {
    /// Lets `recipient` pull `amount` from the exchange's account. The backing
    /// is already paid in; the convertible issues the amount when claimed.
    fn exchange_grant(env: Env, recipient: Address, amount: i128);
}
