//! Thread-safe bank accounts with overdraft floors, interest and pairwise transfers
//!
//! Accounts are shared between threads by reference (or `Arc`) and mutated through `&self`.
//! Every balance write re-checks the account floor under the lock that commits it.

#![deny(missing_docs)]

pub mod account;
pub mod errors;
pub mod owner;
pub mod statement;
pub mod terms;

/// Amount of money, plain floating point without rounding
pub type Money = f64;
/// Fractional interest rate, `0.05` is 5%
pub type Rate = f64;
