use std::{fmt, ops::RangeInclusive, str::FromStr};

use fractic_server_error::ServerError;
use serde_derive::Serialize;

use crate::errors::InvalidTotaling;

use super::account::Account;

/// An account annotated with its nesting depth and, for End Total accounts,
/// the range of account numbers it sums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeveledAccount {
    #[serde(flatten)]
    pub account: Account,
    pub level: usize,
    /// Either empty or `"<start>..<end>"`.
    pub totaling: String,
    /// Positions (in the annotated sequence) of the rows enclosed by this
    /// account's Begin/End Total pair, both ends included.
    #[serde(skip)]
    pub members: Option<RangeInclusive<usize>>,
}

impl LeveledAccount {
    pub fn is_rollup(&self) -> bool {
        !self.totaling.is_empty()
    }

    pub fn totaling_range(&self) -> Result<Option<TotalingRange>, ServerError> {
        if self.totaling.is_empty() {
            Ok(None)
        } else {
            self.totaling.parse().map(Some)
        }
    }
}

/// Inclusive account-number interval summed by a rollup account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TotalingRange {
    pub start: String,
    pub end: String,
}

impl TotalingRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for TotalingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl FromStr for TotalingRange {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split("..");
        match (parts.next(), parts.next()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Ok(TotalingRange::new(start, end))
            }
            _ => Err(InvalidTotaling::new(s)),
        }
    }
}
