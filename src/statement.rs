//! Account snapshots handed over to whoever renders them

use serde::Serialize;

use crate::{account::position::Position, owner::Owner, Money, Rate};

/// balance and limits of one account
///
/// Balance and floor are read together under the balance lock. Owner and rate are read under
/// their own locks, so they may come from a moment just before or after.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[allow(missing_docs)]
pub struct Statement {
    pub owner: Owner,
    pub balance: Money,
    pub floor: Money,
    pub rate: Option<Rate>,
}

impl Statement {
    pub(crate) fn new(owner: Owner, position: Position) -> Self {
        Self {
            owner,
            balance: position.balance(),
            floor: position.floor(),
            rate: None,
        }
    }

    pub(crate) fn with_rate(self, rate: Rate) -> Self {
        Self {
            rate: Some(rate),
            ..self
        }
    }
}
