use soroban_sdk::{contracttype, Address};

/// An item to spend one use of during an execution.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ItemRef {
    pub artifact: Address,
    pub item_id: u32,
}

/// Stages of a single execution, in the order the executor enters them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecutionStage {
    Pending,
    ItemsValidated,
    ItemsSpent,
    Consumed,
    HooksInvoked,
    Provided,
    Committed,
}

impl ExecutionStage {
    pub fn next(self) -> Option<ExecutionStage> {
        match self {
            ExecutionStage::Pending => Some(ExecutionStage::ItemsValidated),
            ExecutionStage::ItemsValidated => Some(ExecutionStage::ItemsSpent),
            ExecutionStage::ItemsSpent => Some(ExecutionStage::Consumed),
            ExecutionStage::Consumed => Some(ExecutionStage::HooksInvoked),
            ExecutionStage::HooksInvoked => Some(ExecutionStage::Provided),
            ExecutionStage::Provided => Some(ExecutionStage::Committed),
            ExecutionStage::Committed => None,
        }
    }
}
