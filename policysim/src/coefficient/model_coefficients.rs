use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// the parameters of one indicator model for one category.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KpiParameters {
    pub model_type: String,
    pub params: BTreeMap<String, f64>,
}

/// the generic derived parameter map: category -> indicator -> parameters,
/// together with the global satisfaction ceiling `S_max`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelCoefficients {
    #[serde(rename = "S_max")]
    pub s_max: f64,
    pub coefficients: BTreeMap<String, BTreeMap<String, KpiParameters>>,
}

impl ModelCoefficients {
    pub fn new(s_max: f64) -> ModelCoefficients {
        ModelCoefficients {
            s_max,
            coefficients: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// the parameters for (category, indicator), created with `model_type`
    /// if this is the first row seen for the pair. an existing entry keeps
    /// its model type and parameters.
    pub fn entry(&mut self, category: &str, indicator: &str, model_type: &str) -> &mut KpiParameters {
        self.coefficients
            .entry(category.to_string())
            .or_default()
            .entry(indicator.to_string())
            .or_insert_with(|| KpiParameters {
                model_type: model_type.to_string(),
                params: BTreeMap::new(),
            })
    }

    pub fn get(&self, category: &str, indicator: &str) -> Option<&KpiParameters> {
        self.coefficients.get(category)?.get(indicator)
    }

    pub fn get_parameter(&self, category: &str, indicator: &str, name: &str) -> Option<f64> {
        self.get(category, indicator)?.params.get(name).copied()
    }
}
