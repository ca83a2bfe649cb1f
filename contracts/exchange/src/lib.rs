#![no_std]

#[cfg(feature = "contract")]
mod contract;

#[cfg(feature = "contract")]
mod storage;

mod hooks;

#[cfg(feature = "interface")]
mod interface;
mod types;

#[cfg(feature = "contract")]
pub use contract::Exchange;

#[cfg(all(feature = "contract", not(feature = "interface")))]
pub use contract::ExchangeClient;

#[cfg(feature = "interface")]
pub use interface::ExchangeClient;

pub use hooks::ExchangeableClient;
pub use types::ExchangeRate;
