#![no_std]

mod contract;

pub use contract::{ConsumableToken, ConsumableTokenClient};

#[cfg(test)]
mod test;
