#![no_std]

#[cfg(feature = "contract")]
mod contract;

#[cfg(feature = "contract")]
mod storage;

#[cfg(feature = "interface")]
mod interface;
mod types;

#[cfg(feature = "contract")]
pub use contract::ActivityExecutor;

#[cfg(all(feature = "contract", not(feature = "interface")))]
pub use contract::ActivityExecutorClient;

#[cfg(feature = "interface")]
pub use interface::ActivityExecutorClient;

pub use types::{ExecutionStage, ItemRef};
