use soroban_sdk::{contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Executor,
    Required,
    Provided,
    Mode,
    Profit,
    ExecutedBy(Address),
    TotalExecuted,
}
