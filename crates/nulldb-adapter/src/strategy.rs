use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// Runtime policy for intercepted operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fail every intercepted operation.
    Raise,
    /// Swallow every intercepted operation and return its default value.
    Noop,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Raise
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Raise => f.write_str("raise"),
            Strategy::Noop => f.write_str("noop"),
        }
    }
}

impl FromStr for Strategy {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raise" => Ok(Strategy::Raise),
            "noop" => Ok(Strategy::Noop),
            other => Err(AdapterError::InvalidStrategy(other.to_string())),
        }
    }
}

/// Scoped strategy override.
///
/// Installs a strategy on creation and restores the saved one when
/// dropped, so the override holds for exactly the guard's lifetime,
/// error or not.
#[derive(Debug)]
pub struct StrategyGuard<'a> {
    cell: &'a Cell<Strategy>,
    saved: Strategy,
}

impl<'a> StrategyGuard<'a> {
    pub(crate) fn install(cell: &'a Cell<Strategy>, next: Strategy) -> Self {
        let saved = cell.replace(next);
        Self { cell, saved }
    }
}

impl Drop for StrategyGuard<'_> {
    fn drop(&mut self) {
        self.cell.set(self.saved);
    }
}
