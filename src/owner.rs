//! Protect before accounts without anybody owning them.

use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::errors::ArgumentErr;

/// Represent non-empty name of the account holder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Owner(String);

impl TryFrom<String> for Owner {
    type Error = ArgumentErr;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(ArgumentErr::EmptyOwner)
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<&str> for Owner {
    type Error = ArgumentErr;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl From<Owner> for String {
    fn from(this: Owner) -> Self {
        this.0
    }
}

impl Borrow<str> for Owner {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for Owner {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
