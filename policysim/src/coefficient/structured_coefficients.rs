use super::{AccessibilityWeights, ModelCoefficients, TransferConvenience};
use serde::{Deserialize, Serialize};

/// the three structures derived from a coefficient table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StructuredCoefficients {
    /// generic parameter map of every (category, indicator) pair
    pub model: ModelCoefficients,
    /// PAI mode weights and alpha exponents
    pub accessibility: AccessibilityWeights,
    /// TCI per-mode parameters
    pub transfer: TransferConvenience,
}

impl StructuredCoefficients {
    /// three empty structures, signalling that no model is available.
    pub fn empty(s_max: f64) -> StructuredCoefficients {
        StructuredCoefficients {
            model: ModelCoefficients::new(s_max),
            accessibility: AccessibilityWeights::default(),
            transfer: TransferConvenience::new(s_max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty() && self.accessibility.is_empty() && self.transfer.is_empty()
    }
}
