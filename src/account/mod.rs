//! Account traits and structs
//!
//! Every kind of account embeds the same holder: owner plus a balance that is only ever written
//! under its own lock, after checking the floor. The kinds differ in the floor they enforce and
//! in what they build on top of the guarded deposit.
use crate::{
    errors::{ArgumentErr, OverdraftErr},
    owner::Owner,
    statement::Statement,
    Money,
};

pub(crate) mod basic;
pub(crate) mod checking;
pub(crate) mod holder;
pub(crate) mod position;
pub(crate) mod savings;

pub use basic::BasicAccount;
pub use checking::CheckingAccount;
pub use savings::SavingsAccount;

/// Represent basic account information and balance
pub trait Account {
    /// current holder of the account
    fn owner(&self) -> Owner;
    /// replace holder, empty names are refused
    fn set_owner(&self, name: &str) -> Result<(), ArgumentErr>;
    /// last committed balance
    fn balance(&self) -> Money;
    /// add `amount` of any sign, negative amounts withdraw money
    fn deposit(&self, amount: Money) -> Result<(), OverdraftErr>;
    /// consistent view of the whole account
    fn statement(&self) -> Statement;

    /// withdraw `amount` of money
    fn withdraw(&self, amount: Money) -> Result<(), OverdraftErr> {
        self.deposit(-amount)
    }
}
