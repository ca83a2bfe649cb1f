#![no_std]
#![allow(clippy::too_many_arguments)]

#[cfg(feature = "contract")]
mod contract;

#[cfg(feature = "contract")]
mod storage;

#[cfg(feature = "interface")]
mod interface;

#[cfg(feature = "contract")]
pub use contract::ConvertibleToken;

#[cfg(all(feature = "contract", not(feature = "interface")))]
pub use contract::ConvertibleTokenClient;

#[cfg(feature = "interface")]
pub use interface::ConvertibleTokenClient;
