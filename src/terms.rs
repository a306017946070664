//! Opening terms for new accounts, as read from whatever configuration the caller keeps.

use serde::{Deserialize, Serialize};

use crate::{
    account::{Account, BasicAccount, CheckingAccount, SavingsAccount},
    errors::{ArgumentErr, OverdraftErr},
    owner::Owner,
    statement::Statement,
    Money, Rate,
};

/// Allowed kinds of account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum AccountKind {
    Basic,
    Savings,
    Checking,
}

/// Everything needed to open one account.
///
/// `floor` applies to checking accounts only, `rate` to savings accounts only.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct AccountTerms {
    pub kind: AccountKind,
    pub owner: Owner,
    pub floor: Option<Money>,
    pub rate: Option<Rate>,
}

impl AccountTerms {
    /// Open account of the requested kind
    pub fn open(self) -> Result<AnyAccount, ArgumentErr> {
        let account = match self.kind {
            AccountKind::Basic => {
                self.refuse_floor()?;
                self.refuse_rate()?;
                AnyAccount::Basic(BasicAccount::new(self.owner))
            }
            AccountKind::Savings => {
                self.refuse_floor()?;
                let rate = self.rate.unwrap_or_default();
                AnyAccount::Savings(SavingsAccount::with_rate(self.owner, rate))
            }
            AccountKind::Checking => {
                self.refuse_rate()?;
                let checking = match self.floor {
                    Some(floor) => CheckingAccount::with_floor(self.owner, floor)?,
                    None => CheckingAccount::new(self.owner),
                };
                AnyAccount::Checking(checking)
            }
        };

        Ok(account)
    }

    fn refuse_floor(&self) -> Result<(), ArgumentErr> {
        match self.floor {
            Some(_) => Err(ArgumentErr::NotApplicable("floor")),
            None => Ok(()),
        }
    }

    fn refuse_rate(&self) -> Result<(), ArgumentErr> {
        match self.rate {
            Some(_) => Err(ArgumentErr::NotApplicable("rate")),
            None => Ok(()),
        }
    }
}

/// Any kind of account, for callers keeping accounts of mixed kinds together
#[derive(Debug)]
#[allow(missing_docs)]
pub enum AnyAccount {
    Basic(BasicAccount),
    Savings(SavingsAccount),
    Checking(CheckingAccount),
}

impl AnyAccount {
    /// kind of the wrapped account
    pub fn kind(&self) -> AccountKind {
        match self {
            AnyAccount::Basic(_) => AccountKind::Basic,
            AnyAccount::Savings(_) => AccountKind::Savings,
            AnyAccount::Checking(_) => AccountKind::Checking,
        }
    }
}

impl From<BasicAccount> for AnyAccount {
    fn from(acc: BasicAccount) -> Self {
        AnyAccount::Basic(acc)
    }
}

impl From<SavingsAccount> for AnyAccount {
    fn from(acc: SavingsAccount) -> Self {
        AnyAccount::Savings(acc)
    }
}

impl From<CheckingAccount> for AnyAccount {
    fn from(acc: CheckingAccount) -> Self {
        AnyAccount::Checking(acc)
    }
}

macro_rules! each_kind {
    ($this:expr, $acc:ident => $body:expr) => {
        match $this {
            AnyAccount::Basic($acc) => $body,
            AnyAccount::Savings($acc) => $body,
            AnyAccount::Checking($acc) => $body,
        }
    };
}

impl Account for AnyAccount {
    fn owner(&self) -> Owner {
        each_kind!(self, acc => acc.owner())
    }

    fn set_owner(&self, name: &str) -> Result<(), ArgumentErr> {
        each_kind!(self, acc => acc.set_owner(name))
    }

    fn balance(&self) -> Money {
        each_kind!(self, acc => acc.balance())
    }

    fn deposit(&self, amount: Money) -> Result<(), OverdraftErr> {
        each_kind!(self, acc => acc.deposit(amount))
    }

    fn statement(&self) -> Statement {
        each_kind!(self, acc => acc.statement())
    }
}
