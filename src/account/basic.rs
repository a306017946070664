use super::{holder::Holder, position::Position, Account};
use crate::{
    errors::{ArgumentErr, OverdraftErr},
    owner::Owner,
    statement::Statement,
    Money,
};

/// Account that may never have a negative balance
#[derive(Debug)]
pub struct BasicAccount {
    holder: Holder,
}

impl BasicAccount {
    /// Create new empty account for `owner`
    pub fn new(owner: Owner) -> Self {
        Self {
            holder: Holder::new(owner, Position::new()),
        }
    }

    /// Deposit amount computed from the locked position, see `Holder::deposit_with`.
    pub(crate) fn deposit_with(
        &self,
        amount: impl FnOnce(&Position) -> Money,
    ) -> Result<Money, OverdraftErr> {
        // the zero floor is fixed, so only the amount is worth reporting
        self.holder
            .deposit_with(amount)
            .map_err(|e| OverdraftErr::new(e.amount))
    }
}

impl Account for BasicAccount {
    fn owner(&self) -> Owner {
        self.holder.owner()
    }

    fn set_owner(&self, name: &str) -> Result<(), ArgumentErr> {
        self.holder.set_owner(name)
    }

    fn balance(&self) -> Money {
        self.holder.snapshot().balance()
    }

    fn deposit(&self, amount: Money) -> Result<(), OverdraftErr> {
        self.deposit_with(|_| amount).map(drop)
    }

    fn statement(&self) -> Statement {
        Statement::new(self.holder.owner(), self.holder.snapshot())
    }
}
