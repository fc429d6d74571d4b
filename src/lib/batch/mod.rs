use std::collections::HashMap;

use log::{debug, warn};

use crate::error::FireDangerError;
use crate::modules::fwi::models::MoistureState;

pub mod raster;
pub mod table;

/// What to do when a single row or cell fails: record it and emit no-data
/// for that unit, or abort the whole batch on the first error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    Collect,
    Strict,
}

/// How chained moisture runs seed the first day of each station sequence.
#[derive(Debug, Clone)]
pub enum SeedPolicy {
    /// every group starts from the same state
    Fixed(MoistureState),
    /// every group must have an explicit seed
    PerGroup(HashMap<i64, MoistureState>),
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Fixed(MoistureState::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitFailure {
    /// row index in table runs, row-major cell index in raster runs
    pub index: usize,
    pub error: FireDangerError,
}

/// Per-batch record of the rows/cells that were dropped to no-data.
#[derive(Debug, Clone, Default)]
pub struct BatchDiagnostics {
    pub failures: Vec<UnitFailure>,
}

impl BatchDiagnostics {
    pub fn record(&mut self, index: usize, error: FireDangerError) {
        self.failures.push(UnitFailure { index, error });
    }

    pub fn merge(&mut self, other: BatchDiagnostics) {
        self.failures.extend(other.failures);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn log_summary(&self, what: &str) {
        if self.is_clean() {
            debug!("{}: batch completed clean", what);
        } else {
            warn!(
                "{}: {} units dropped to no-data, first: {}",
                what,
                self.failures.len(),
                self.failures[0].error
            );
        }
    }
}
