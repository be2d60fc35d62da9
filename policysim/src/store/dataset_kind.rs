use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the tabular datasets managed by an overlay store. each kind has an
/// immutable original artifact and an optional user-modified override.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// list of infrastructure policy projects
    Policy,
    /// satisfaction model coefficient table
    Coefficients,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Policy, DatasetKind::Coefficients];

    /// field delimiter used by both the original and modified artifacts.
    /// the coefficient table is tab-separated even though it carries a `.csv`
    /// extension.
    pub fn delimiter(&self) -> u8 {
        match self {
            DatasetKind::Policy => b',',
            DatasetKind::Coefficients => b'\t',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DatasetKind::Policy => "policy list",
            DatasetKind::Coefficients => "satisfaction coefficient table",
        }
    }
}

impl Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetKind::Policy => write!(f, "policy"),
            DatasetKind::Coefficients => write!(f, "coefficients"),
        }
    }
}
