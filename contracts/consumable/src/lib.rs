#![no_std]

pub mod aggregate;
pub mod base;
mod error;
mod interface;
pub mod math;
pub mod status;
mod storage;
mod types;

pub use error::EconomyError;
pub use interface::{ComponentClient, ConsumableClient};
pub use types::{ComponentKind, ConsumableAmount, Pull, TokenMetadata};
