//! Store-assigned integer identifier.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Serialize;

/// Unique identifier for an [`Employee`](crate::employee::Employee).
///
/// Values are generated by the record store on insert and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw row id.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw row id.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
