//! Rounding rules for conversions between a convertible and its backing.
//!
//! Issuing rounds the backing requirement up, redeeming rounds the released
//! backing down, so neither direction can create value from a remainder.

/// `ceil(amount / rate)` for a non-negative amount and a positive rate.
pub fn ceil_div(amount: i128, rate: i128) -> i128 {
    let quotient = amount / rate;
    if amount % rate != 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// `floor(amount / rate)` for a non-negative amount and a positive rate.
pub fn floor_div(amount: i128, rate: i128) -> i128 {
    amount / rate
}
