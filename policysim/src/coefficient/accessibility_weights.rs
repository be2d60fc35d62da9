use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// mode weights and alpha exponents of the physical accessibility (PAI)
/// model, keyed by category.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccessibilityWeights {
    /// category -> access mode -> weight
    pub weights: BTreeMap<String, BTreeMap<String, f64>>,
    /// category -> alpha exponent
    pub alpha: BTreeMap<String, f64>,
}

impl AccessibilityWeights {
    /// prefix of a PAI parameter name carrying a mode weight, e.g. `w_도보`.
    pub const WEIGHT_PREFIX: &str = "w_";
    pub const ALPHA_KEY: &str = "alpha";

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty() && self.alpha.is_empty()
    }

    pub fn insert_weight(&mut self, category: &str, mode: &str, weight: f64) {
        self.weights
            .entry(category.to_string())
            .or_default()
            .insert(mode.to_string(), weight);
    }

    pub fn insert_alpha(&mut self, category: &str, alpha: f64) {
        self.alpha.insert(category.to_string(), alpha);
    }

    pub fn weight(&self, category: &str, mode: &str) -> Option<f64> {
        self.weights.get(category)?.get(mode).copied()
    }

    pub fn alpha(&self, category: &str) -> Option<f64> {
        self.alpha.get(category).copied()
    }
}
