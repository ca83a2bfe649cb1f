#![no_std]

#[cfg(feature = "contract")]
mod contract;

#[cfg(feature = "contract")]
mod storage;

#[cfg(feature = "interface")]
mod interface;

#[cfg(feature = "contract")]
pub use contract::Artifact;

#[cfg(all(feature = "contract", not(feature = "interface")))]
pub use contract::ArtifactClient;

#[cfg(feature = "interface")]
pub use interface::ArtifactClient;

#[cfg(test)]
mod test;
