//! Possible errors

use crate::Money;
use thiserror::Error;

/// Balance-decreasing operation would leave the account below its floor.
///
/// The account state is unchanged when this error is returned, so the caller may retry with
/// different parameters.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("operation of {amount} would overdraft the account")]
pub struct OverdraftErr {
    /// amount of the rejected deposit, or the rejected floor for floor changes
    pub amount: Money,
    /// balance the operation was checked against, when the check knows about a floor
    pub balance: Option<Money>,
}

impl OverdraftErr {
    pub(crate) fn new(amount: Money) -> Self {
        Self {
            amount,
            balance: None,
        }
    }

    pub(crate) fn against(amount: Money, balance: Money) -> Self {
        Self {
            amount,
            balance: Some(balance),
        }
    }
}

/// Group structural precondition violations. Retrying with the same input will fail again.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ArgumentErr {
    #[error("owner may not be empty")]
    EmptyOwner,
    #[error("overdraft floor must not be positive, got {0}")]
    PositiveFloor(Money),
    #[error("opening overdraft floor must be negative, got {0}")]
    NonNegativeOpeningFloor(Money),
    #[error("value is not a number")]
    NotANumber,
    #[error("{0} does not apply to this kind of account")]
    NotApplicable(&'static str),
}

/// Group all errors that can occurs within account module
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum AccountErr {
    #[error("account overdraft")]
    Overdraft(#[from] OverdraftErr),
    #[error("invalid argument")]
    InvalidArgument(#[from] ArgumentErr),
}
