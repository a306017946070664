use crate::errors::OverdraftErr;
use crate::Money;

/// Balance together with the lowest value it may reach.
///
/// Plain data, every account keeps it behind its own lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    balance: Money,
    floor: Money,
}

impl Position {
    /// Empty position that may never go below zero
    pub fn new() -> Self {
        Self::with_floor(0.0)
    }

    pub fn with_floor(floor: Money) -> Self {
        debug_assert!(floor <= 0.0);
        Self {
            balance: 0.0,
            floor,
        }
    }

    /// Add `amount` of any sign if the result stays at or above the floor.
    ///
    /// Returns new balance. On error the position is untouched.
    pub fn try_deposit(&mut self, amount: Money) -> Result<Money, Money> {
        let new_balance = self.balance + amount;

        // NaN never compares, so it is refused here as well
        if new_balance >= self.floor {
            self.balance = new_balance;
            Ok(new_balance)
        } else {
            Err(self.balance)
        }
    }

    /// Move the floor, which must stay strictly below the current balance.
    pub fn try_set_floor(&mut self, floor: Money) -> Result<(), OverdraftErr> {
        if floor >= self.balance {
            return Err(OverdraftErr::against(floor, self.balance));
        }

        self.floor = floor;
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn floor(&self) -> Money {
        self.floor
    }
}
