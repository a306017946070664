use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use super::position::Position;
use crate::{
    errors::{ArgumentErr, OverdraftErr},
    owner::Owner,
    Money,
};

/// Owner and guarded position shared by every kind of account.
///
/// All balance writes go through [`Holder::deposit_with`], so the floor is always checked under
/// the same lock that commits the new balance.
#[derive(Debug)]
pub(crate) struct Holder {
    owner: RwLock<Owner>,
    position: Mutex<Position>,
}

impl Holder {
    pub fn new(owner: Owner, position: Position) -> Self {
        Self {
            owner: RwLock::new(owner),
            position: Mutex::new(position),
        }
    }

    pub fn owner(&self) -> Owner {
        self.owner.read().clone()
    }

    pub fn set_owner(&self, name: &str) -> Result<(), ArgumentErr> {
        let owner = Owner::try_from(name)?;
        *self.owner.write() = owner;
        Ok(())
    }

    pub fn snapshot(&self) -> Position {
        *self.position.lock()
    }

    /// Deposit amount computed from the locked position.
    ///
    /// The error always carries the balance the amount was checked against.
    pub fn deposit_with(
        &self,
        amount: impl FnOnce(&Position) -> Money,
    ) -> Result<Money, OverdraftErr> {
        let (amount, outcome, floor) = {
            let mut position = self.position.lock();
            let amount = amount(&position);
            (amount, position.try_deposit(amount), position.floor())
        };

        match outcome {
            Ok(balance) => {
                debug!(owner = %self.owner(), amount, balance, "deposit committed");
                Ok(amount)
            }
            Err(balance) => {
                warn!(owner = %self.owner(), amount, balance, floor, "deposit rejected");
                Err(OverdraftErr::against(amount, balance))
            }
        }
    }

    pub fn deposit(&self, amount: Money) -> Result<(), OverdraftErr> {
        self.deposit_with(|_| amount).map(drop)
    }

    pub fn set_floor(&self, floor: Money) -> Result<(), OverdraftErr> {
        let outcome = self.position.lock().try_set_floor(floor);

        match outcome {
            Ok(()) => {
                debug!(owner = %self.owner(), floor, "floor changed");
                Ok(())
            }
            Err(e) => {
                let balance = e.balance;
                warn!(owner = %self.owner(), floor, ?balance, "floor change rejected");
                Err(e)
            }
        }
    }
}
