use parking_lot::Mutex;
use tracing::{debug, error, warn};

use super::{holder::Holder, position::Position, Account};
use crate::{
    errors::{AccountErr, ArgumentErr, OverdraftErr},
    owner::Owner,
    statement::Statement,
    Money,
};

/// Account that may overdraft down to a configurable floor and transfer money to other
/// checking accounts.
///
/// Two locks are involved. The floor and balance live behind the holder lock, taken by every
/// deposit and floor change. Transfers initiated from this account are serialized by a second,
/// independent lock. A transfer holds its own initiation lock but takes the balance lock of one
/// account at a time, so deposits and floor changes keep flowing while a transfer is in flight,
/// and two accounts transferring to each other can not deadlock.
#[derive(Debug)]
pub struct CheckingAccount {
    holder: Holder,
    transfers: Mutex<()>,
}

impl CheckingAccount {
    /// Create new empty account without overdraft
    pub fn new(owner: Owner) -> Self {
        Self::open(owner, Position::new())
    }

    /// Create new empty account allowed to go down to `floor`.
    ///
    /// The floor must be negative, [`f64::NEG_INFINITY`] allows unlimited overdraft.
    pub fn with_floor(owner: Owner, floor: Money) -> Result<Self, ArgumentErr> {
        if floor.is_nan() {
            return Err(ArgumentErr::NotANumber);
        }
        if floor >= 0.0 {
            return Err(ArgumentErr::NonNegativeOpeningFloor(floor));
        }

        Ok(Self::open(owner, Position::with_floor(floor)))
    }

    fn open(owner: Owner, position: Position) -> Self {
        Self {
            holder: Holder::new(owner, position),
            transfers: Mutex::new(()),
        }
    }

    /// lowest balance this account may reach
    pub fn floor(&self) -> Money {
        self.holder.snapshot().floor()
    }

    /// Move the overdraft floor.
    ///
    /// `floor` must not be positive and must stay strictly below the current balance, otherwise
    /// both floor and balance are left untouched.
    pub fn set_floor(&self, floor: Money) -> Result<(), AccountErr> {
        if floor.is_nan() {
            return Err(ArgumentErr::NotANumber.into());
        }
        if floor > 0.0 {
            return Err(ArgumentErr::PositiveFloor(floor).into());
        }

        self.holder.set_floor(floor)?;
        Ok(())
    }

    /// Move `amount` from this account to `other`. Negative amounts move money the other way.
    ///
    /// Infinite and NaN amounts are refused up front with no balance checked, both accounts are
    /// left untouched. The withdrawing leg always runs first, a failure there leaves both
    /// accounts untouched too. A finite credit can not drop a balance below its floor, so the
    /// crediting leg only fails if that changes, and the withdrawn money is then credited back
    /// before the error is returned.
    pub fn transfer(&self, amount: Money, other: &CheckingAccount) -> Result<(), OverdraftErr> {
        if !amount.is_finite() {
            warn!(from = %self.owner(), to = %other.owner(), amount, "non-finite transfer refused");
            return Err(OverdraftErr::new(amount));
        }

        let _initiation = self.transfers.lock();

        let (from, to, moved) = if amount >= 0.0 {
            (self, other, amount)
        } else {
            (other, self, -amount)
        };

        from.holder.deposit(-moved)?;

        if let Err(e) = to.holder.deposit(moved) {
            warn!(from = %from.owner(), to = %to.owner(), moved, "transfer credit failed, rolling back");

            if let Err(undo) = from.holder.deposit(moved) {
                error!(owner = %from.owner(), moved, error = %undo, "transfer rollback failed");
            }
            return Err(e);
        }

        debug!(from = %from.owner(), to = %to.owner(), moved, "transfer committed");
        Ok(())
    }
}

impl Account for CheckingAccount {
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
        self.holder.deposit(amount)
    }

    fn statement(&self) -> Statement {
        Statement::new(self.holder.owner(), self.holder.snapshot())
    }
}

#[cfg(test)]
mod test {
    use std::{sync::Arc, time::Duration};

    use tokio::time::timeout;

    use super::{Account, CheckingAccount};
    use crate::errors::{AccountErr, ArgumentErr, OverdraftErr};

    const DELTA: f64 = 0.0001;

    fn account(floor: f64) -> CheckingAccount {
        if floor == 0.0 {
            CheckingAccount::new("Test Owner".try_into().unwrap())
        } else {
            CheckingAccount::with_floor("Test Owner".try_into().unwrap(), floor).unwrap()
        }
    }

    fn funded(balance: f64, floor: f64) -> CheckingAccount {
        let a = account(floor);
        a.deposit(balance).unwrap();
        a
    }

    #[test]
    fn creation_without_overdraft() {
        let a = CheckingAccount::new("Test Owner".try_into().unwrap());
        assert_eq!(&*a.owner(), "Test Owner");
        assert_eq!(a.floor(), 0.0);
        assert_eq!(a.balance(), 0.0);
    }

    #[test]
    fn creation_with_floor() {
        let a = account(-5000.0);
        assert_eq!(a.floor(), -5000.0);

        let owner = || -> crate::owner::Owner { "Test Owner".try_into().unwrap() };
        assert_eq!(
            CheckingAccount::with_floor(owner(), 5000.0).unwrap_err(),
            ArgumentErr::NonNegativeOpeningFloor(5000.0)
        );
        assert_eq!(
            CheckingAccount::with_floor(owner(), 0.0).unwrap_err(),
            ArgumentErr::NonNegativeOpeningFloor(0.0)
        );
        assert_eq!(
            CheckingAccount::with_floor(owner(), f64::NAN).unwrap_err(),
            ArgumentErr::NotANumber
        );
    }

    #[test]
    fn set_negative_floor() {
        let a = account(0.0);
        a.set_floor(-2000.0).unwrap();
        assert_eq!(a.floor(), -2000.0);

        // same value again
        a.set_floor(-2000.0).unwrap();
        assert_eq!(a.floor(), -2000.0);
    }

    #[test]
    fn set_positive_floor() {
        let a = account(0.0);
        assert_eq!(
            a.set_floor(2000.0),
            Err(AccountErr::InvalidArgument(ArgumentErr::PositiveFloor(2000.0)))
        );
        assert_eq!(a.floor(), 0.0);
    }

    #[test]
    fn floor_equal_to_balance_is_refused() {
        let a = account(0.0);
        assert_eq!(
            a.set_floor(0.0),
            Err(AccountErr::Overdraft(OverdraftErr {
                amount: 0.0,
                balance: Some(0.0)
            }))
        );
    }

    #[test]
    fn floor_above_balance_is_refused() {
        let a = account(-3000.0);
        a.deposit(-3000.0).unwrap();
        assert_eq!(a.balance(), -3000.0);

        let e = a.set_floor(-2000.0).unwrap_err();
        assert_eq!(
            e,
            AccountErr::Overdraft(OverdraftErr {
                amount: -2000.0,
                balance: Some(-3000.0)
            })
        );
        assert_eq!(a.floor(), -3000.0);
        assert_eq!(a.balance(), -3000.0);
    }

    #[test]
    fn overdraft_with_zero_floor() {
        let a = funded(100.0, 0.0);

        let e = a.deposit(-150.0).unwrap_err();
        assert_eq!(e.amount, -150.0);
        assert_eq!(e.balance, Some(100.0));
        assert_eq!(a.balance(), 100.0);
    }

    #[test]
    fn overdraft_with_non_zero_floor() {
        let a = account(-50.0);
        a.deposit(100.0).unwrap();
        a.deposit(-150.0).unwrap();
        assert_eq!(a.balance(), -50.0);

        a.deposit(-0.01).unwrap_err();
        assert_eq!(a.balance(), -50.0);
    }

    #[test]
    fn floor_changes_between_deposits() {
        let a = account(-500.0);
        a.deposit(100.0).unwrap();
        assert_eq!(a.balance(), 100.0);

        a.deposit(-700.0).unwrap_err();
        assert_eq!(a.balance(), 100.0);

        a.set_floor(-50.0).unwrap();
        assert_eq!(a.floor(), -50.0);

        a.deposit(-200.0).unwrap_err();
        assert_eq!(a.balance(), 100.0);
    }

    fn check_transfer(balance_a: f64, floor_a: f64, balance_b: f64, floor_b: f64, amount: f64) {
        let a = funded(balance_a, floor_a);
        let b = funded(balance_b, floor_b);

        a.transfer(amount, &b).unwrap();

        assert!((a.balance() - (balance_a - amount)).abs() < DELTA);
        assert!((b.balance() - (balance_b + amount)).abs() < DELTA);
    }

    #[test]
    fn transfer_positive() {
        check_transfer(2000.0, 0.0, 500.0, 0.0, 1000.0);
    }

    #[test]
    fn transfer_negative() {
        check_transfer(2000.0, 0.0, 1500.0, 0.0, -1000.0);
    }

    #[test]
    fn transfer_into_overdraft() {
        check_transfer(2000.0, -500.0, 2000.0, 0.0, 2500.0);
        check_transfer(100.0, 0.0, 2000.0, -500.0, -2500.0);
    }

    #[test]
    fn failed_transfer_leaves_both_untouched() {
        let a = funded(2000.0, -100.0);
        let b = funded(500.0, 0.0);

        let e = a.transfer(2500.0, &b).unwrap_err();
        assert_eq!(e.amount, -2500.0);
        assert_eq!(e.balance, Some(2000.0));
        assert_eq!(a.balance(), 2000.0);
        assert_eq!(b.balance(), 500.0);

        // pulling from `b` fails on `b`
        let e = a.transfer(-2500.0, &b).unwrap_err();
        assert_eq!(e.balance, Some(500.0));
        assert_eq!(a.balance(), 2000.0);
        assert_eq!(b.balance(), 500.0);
    }

    #[test]
    fn non_finite_transfer_is_refused() {
        // -inf + inf would be NaN on the crediting leg
        let a = account(f64::NEG_INFINITY);
        a.deposit(f64::NEG_INFINITY).unwrap();
        let c = funded(100.0, f64::NEG_INFINITY);

        let e = c.transfer(f64::INFINITY, &a).unwrap_err();
        assert_eq!(
            e,
            OverdraftErr {
                amount: f64::INFINITY,
                balance: None
            }
        );
        assert_eq!(c.balance(), 100.0);
        assert_eq!(a.balance(), f64::NEG_INFINITY);

        let e = c.transfer(f64::NEG_INFINITY, &a).unwrap_err();
        assert_eq!(e.amount, f64::NEG_INFINITY);
        assert_eq!(c.balance(), 100.0);
        assert_eq!(a.balance(), f64::NEG_INFINITY);

        let e = c.transfer(f64::NAN, &a).unwrap_err();
        assert!(e.amount.is_nan());
        assert_eq!(c.balance(), 100.0);
        assert_eq!(a.balance(), f64::NEG_INFINITY);
    }

    #[test]
    fn finite_transfer_into_unbounded_debt() {
        let a = account(f64::NEG_INFINITY);
        a.deposit(f64::NEG_INFINITY).unwrap();
        let c = funded(100.0, f64::NEG_INFINITY);

        c.transfer(40.0, &a).unwrap();
        assert_eq!(c.balance(), 60.0);
        assert_eq!(a.balance(), f64::NEG_INFINITY);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn deposits_and_floor_changes_pass_held_transfer_lock() -> anyhow::Result<()> {
        let a = Arc::new(funded(0.0, 0.0));
        let b = Arc::new(funded(100.0, 0.0));

        // a transfer from `a` in flight keeps this lock for its whole duration
        let _initiation = a.transfers.lock();

        let (acc, other) = (a.clone(), b.clone());
        let task = tokio::task::spawn_blocking(move || -> Result<(), AccountErr> {
            acc.deposit(5.0)?;
            acc.set_floor(-10.0)?;
            // transfers initiated elsewhere may still credit `acc`
            other.transfer(30.0, &acc)?;
            Ok(())
        });
        timeout(Duration::from_secs(5), task).await???;

        assert_eq!(a.balance(), 35.0);
        assert_eq!(a.floor(), -10.0);
        assert_eq!(b.balance(), 70.0);
        Ok(())
    }

    #[test]
    fn transfer_to_self_keeps_balance() {
        let a = funded(100.0, 0.0);
        a.transfer(60.0, &a).unwrap();
        assert_eq!(a.balance(), 100.0);

        a.transfer(150.0, &a).unwrap_err();
        assert_eq!(a.balance(), 100.0);
    }
}
