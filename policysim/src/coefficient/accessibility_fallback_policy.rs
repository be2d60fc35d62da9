use super::AccessibilityWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// decides what happens to the PAI weights after all coefficient rows are
/// folded.
///
/// under [`AccessibilityFallbackPolicy::OverwriteKnown`] the weights and alpha
/// of the three built-in rail types are replaced by a fixed table, so any
/// `w_*` or `alpha` rows for those rail types never reach the model. other
/// rail types keep their row values. whether rows should instead take
/// precedence is an open product question; `RowsOnly` skips the overwrite.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityFallbackPolicy {
    #[default]
    OverwriteKnown,
    RowsOnly,
}

/// alpha exponent for every built-in rail type
const FALLBACK_ALPHA: f64 = 1.0;

static FALLBACK_WEIGHTS: [(&str, [(&str, f64); 8]); 3] = [
    (
        "고속철도",
        [
            ("도보", 10.28),
            ("택시", 26.64),
            ("승용차", 20.56),
            ("자전거", 0.47),
            ("공유PM", 0.47),
            ("마을/시내버스", 18.22),
            ("광역버스", 4.21),
            ("지하철/광역철도", 19.16),
        ],
    ),
    (
        "일반철도",
        [
            ("도보", 5.97),
            ("택시", 30.59),
            ("승용차", 23.13),
            ("자전거", 2.24),
            ("공유PM", 1.49),
            ("마을/시내버스", 27.61),
            ("광역버스", 5.22),
            ("지하철/광역철도", 3.73),
        ],
    ),
    (
        "광역철도",
        [
            ("도보", 39.06),
            ("택시", 9.67),
            ("승용차", 6.81),
            ("자전거", 5.38),
            ("공유PM", 3.58),
            ("마을/시내버스", 23.66),
            ("광역버스", 3.58),
            ("지하철/광역철도", 8.24),
        ],
    ),
];

impl AccessibilityFallbackPolicy {
    /// the rail types covered by the fallback table.
    pub fn covered_categories() -> impl Iterator<Item = &'static str> {
        FALLBACK_WEIGHTS.iter().map(|(category, _)| *category)
    }

    pub fn apply(&self, accessibility: &mut AccessibilityWeights) {
        match self {
            AccessibilityFallbackPolicy::RowsOnly => {}
            AccessibilityFallbackPolicy::OverwriteKnown => {
                for (category, modes) in FALLBACK_WEIGHTS.iter() {
                    if accessibility.weights.contains_key(*category) {
                        log::debug!("PAI weight rows for {category} replaced by fallback table");
                    }
                    let weights = modes
                        .iter()
                        .map(|(mode, weight)| (mode.to_string(), *weight))
                        .collect::<BTreeMap<_, _>>();
                    accessibility.weights.insert(category.to_string(), weights);
                    accessibility.insert_alpha(category, FALLBACK_ALPHA);
                }
            }
        }
    }
}
