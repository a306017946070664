use parking_lot::RwLock;
use tracing::debug;

use super::{basic::BasicAccount, Account};
use crate::{
    errors::{ArgumentErr, OverdraftErr},
    owner::Owner,
    statement::Statement,
    Money, Rate,
};

/// Account without overdraft that pays interest on its balance
#[derive(Debug)]
pub struct SavingsAccount {
    account: BasicAccount,
    rate: RwLock<Rate>,
}

impl SavingsAccount {
    /// Create new empty account that pays no interest
    pub fn new(owner: Owner) -> Self {
        Self::with_rate(owner, 0.0)
    }

    /// Create new empty account paying `rate` (0.05 is 5%)
    pub fn with_rate(owner: Owner, rate: Rate) -> Self {
        Self {
            account: BasicAccount::new(owner),
            rate: RwLock::new(rate),
        }
    }

    /// current interest rate
    pub fn rate(&self) -> Rate {
        *self.rate.read()
    }

    /// Replace interest rate. Any value is accepted.
    pub fn set_rate(&self, rate: Rate) {
        *self.rate.write() = rate;
    }

    /// interest the current balance would earn
    pub fn accrued(&self) -> Money {
        self.balance() * self.rate()
    }

    /// Credit accrued interest to the balance.
    ///
    /// Interest is computed and deposited under one lock acquisition, so the result is always
    /// `balance * (1 + rate)` of the balance seen at that moment. Fails only with a negative rate
    /// large enough to take the balance below zero.
    pub fn pay_interest(&self) -> Result<(), OverdraftErr> {
        let paid = self
            .account
            .deposit_with(|position| position.balance() * *self.rate.read())?;

        debug!(owner = %self.owner(), paid, "interest paid");
        Ok(())
    }
}

impl Account for SavingsAccount {
    fn owner(&self) -> Owner {
        self.account.owner()
    }

    fn set_owner(&self, name: &str) -> Result<(), ArgumentErr> {
        self.account.set_owner(name)
    }

    fn balance(&self) -> Money {
        self.account.balance()
    }

    fn deposit(&self, amount: Money) -> Result<(), OverdraftErr> {
        self.account.deposit(amount)
    }

    fn statement(&self) -> Statement {
        self.account.statement().with_rate(self.rate())
    }
}
