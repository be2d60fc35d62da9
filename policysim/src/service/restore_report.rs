use crate::store::{RestoreOutcome, StoreError};
use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// what a restore request applies to.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestoreTarget {
    Policy,
    Coefficients,
    All,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestoreStatus {
    /// a modified artifact was removed
    Restored,
    /// nothing to remove
    AlreadyOriginal,
    /// at least one removal failed; others may still have succeeded
    Failed,
}

/// outcome of a restore request as reported to the host application.
/// removal failures are carried here rather than returned as errors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RestoreReport {
    pub target: RestoreTarget,
    removed: bool,
    failures: Vec<String>,
}

impl RestoreReport {
    pub fn new(
        target: RestoreTarget,
        outcome: RestoreOutcome,
        failures: Vec<StoreError>,
    ) -> RestoreReport {
        let failures = failures
            .iter()
            .map(|e| {
                log::error!("restore of {target:?} failed: {e}");
                e.to_string()
            })
            .collect();
        RestoreReport {
            target,
            removed: outcome.removed(),
            failures,
        }
    }

    pub fn from_result(
        target: RestoreTarget,
        result: Result<RestoreOutcome, StoreError>,
    ) -> RestoreReport {
        match result {
            Ok(outcome) => RestoreReport::new(target, outcome, vec![]),
            Err(e) => RestoreReport::new(target, RestoreOutcome::AlreadyOriginal, vec![e]),
        }
    }

    /// true if an artifact was actually removed, even when another removal
    /// of the same request failed.
    pub fn removed(&self) -> bool {
        self.removed
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn is_failure(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn status(&self) -> RestoreStatus {
        if self.is_failure() {
            RestoreStatus::Failed
        } else if self.removed {
            RestoreStatus::Restored
        } else {
            RestoreStatus::AlreadyOriginal
        }
    }
}

impl Display for RestoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status(), self.target) {
            (RestoreStatus::Restored, RestoreTarget::Policy) => {
                write!(f, "policy data restored to its original state")
            }
            (RestoreStatus::Restored, RestoreTarget::Coefficients) => {
                write!(f, "satisfaction coefficient data restored to its original state")
            }
            (RestoreStatus::Restored, RestoreTarget::All) => {
                write!(f, "all data restored to its original state")
            }
            (RestoreStatus::AlreadyOriginal, RestoreTarget::All) => {
                write!(f, "all data is already in its original state")
            }
            (RestoreStatus::AlreadyOriginal, _) => write!(f, "already in its original state"),
            (RestoreStatus::Failed, _) => {
                write!(f, "restore failed: {}", self.failures.iter().join("; "))?;
                if self.removed {
                    write!(f, " (remaining modified data was restored)")?;
                }
                Ok(())
            }
        }
    }
}
