#![no_std]

#[cfg(feature = "contract")]
mod contract;

#[cfg(feature = "contract")]
mod storage;

#[cfg(feature = "interface")]
mod interface;
mod types;

#[cfg(feature = "contract")]
pub use contract::Activity;

#[cfg(all(feature = "contract", not(feature = "interface")))]
pub use contract::ActivityClient;

#[cfg(feature = "interface")]
pub use interface::ActivityClient;

pub use types::ActivityKind;
