use soroban_sdk::contracterror;

/// Failure reasons shared by every contract of the economy.
///
/// Codes are stable: a failure raised deep inside a nested call reaches the
/// top-level caller with the same code. A paused contract fails with
/// `PausableError::EnforcedPause` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracterror]
#[repr(u32)]
pub enum EconomyError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    InsufficientUses = 7,
    InsufficientReserve = 8,
    LimitExceeded = 9,
    CapabilityMismatch = 10,
    NotOwner = 11,
    InvalidRate = 12,
    AlreadyRegistered = 13,
    NotRegistered = 14,
    IndexOutOfBounds = 15,
    UnsustainableExchange = 16,
    InvalidBasket = 17,
    ItemNotFound = 18,
    Overflow = 19,
    Insolvent = 20,
}
