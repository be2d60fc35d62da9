use crate::kpi::TCI_MODES;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// per-mode `P` and `c` values of the transfer convenience model for one
/// category.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ModeParameters {
    #[serde(rename = "P")]
    pub p: BTreeMap<String, f64>,
    pub c: BTreeMap<String, f64>,
}

/// transfer convenience (TCI) parameters keyed by category, plus the global
/// satisfaction ceiling.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransferConvenience {
    #[serde(rename = "S_max")]
    pub s_max: f64,
    pub categories: BTreeMap<String, ModeParameters>,
}

impl TransferConvenience {
    /// parameter name that sets the satisfaction ceiling
    pub const S_MAX_KEY: &str = "S_max";
    pub const P_PREFIX: &str = "P_";
    pub const C_PREFIX: &str = "c_";

    pub fn new(s_max: f64) -> TransferConvenience {
        TransferConvenience {
            s_max,
            categories: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn ensure_category(&mut self, category: &str) -> &mut ModeParameters {
        self.categories.entry(category.to_string()).or_default()
    }

    pub fn p(&self, category: &str, mode: &str) -> Option<f64> {
        self.categories.get(category)?.p.get(mode).copied()
    }

    pub fn c(&self, category: &str, mode: &str) -> Option<f64> {
        self.categories.get(category)?.c.get(mode).copied()
    }

    /// standard transfer modes lacking either a `P` or a `c` value for
    /// `category`, in display order.
    pub fn missing_modes(&self, category: &str) -> Vec<&'static str> {
        TCI_MODES
            .into_iter()
            .filter(|mode| self.p(category, mode).is_none() || self.c(category, mode).is_none())
            .collect()
    }
}
