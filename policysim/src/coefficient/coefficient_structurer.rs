use super::{
    AccessibilityFallbackPolicy, AccessibilityWeights, CoefficientColumns, CoefficientError,
    CoefficientRow, ModelCoefficients, StructuredCoefficients, TransferConvenience,
};
use crate::{kpi::Kpi, store::Table};

/// folds a coefficient table into [`StructuredCoefficients`].
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientStructurer {
    /// model type assigned to rows without one
    pub baseline_model_type: String,
    /// satisfaction ceiling used unless a TCI `S_max` row overrides it
    pub default_s_max: f64,
    pub fallback_policy: AccessibilityFallbackPolicy,
}

impl Default for CoefficientStructurer {
    fn default() -> Self {
        Self {
            baseline_model_type: String::from(Self::BASELINE_MODEL_TYPE),
            default_s_max: Self::DEFAULT_S_MAX,
            fallback_policy: AccessibilityFallbackPolicy::default(),
        }
    }
}

/// role of a PAI `param1_name`
enum PaiParameter<'a> {
    Weight(&'a str),
    Alpha,
    Other,
}

/// role of a TCI `param1_name`
enum TciParameter<'a> {
    Ceiling,
    P(&'a str),
    C(&'a str),
    Other,
}

fn classify_pai(name: &str) -> PaiParameter<'_> {
    if let Some(mode) = name.strip_prefix(AccessibilityWeights::WEIGHT_PREFIX) {
        PaiParameter::Weight(mode)
    } else if name == AccessibilityWeights::ALPHA_KEY {
        PaiParameter::Alpha
    } else {
        PaiParameter::Other
    }
}

fn classify_tci(name: &str) -> TciParameter<'_> {
    if name == TransferConvenience::S_MAX_KEY {
        TciParameter::Ceiling
    } else if let Some(mode) = name.strip_prefix(TransferConvenience::P_PREFIX) {
        TciParameter::P(mode)
    } else if let Some(mode) = name.strip_prefix(TransferConvenience::C_PREFIX) {
        TciParameter::C(mode)
    } else {
        TciParameter::Other
    }
}

impl CoefficientStructurer {
    pub const BASELINE_MODEL_TYPE: &str = "A";
    pub const DEFAULT_S_MAX: f64 = 10.0;

    pub fn new(
        baseline_model_type: &str,
        default_s_max: f64,
        fallback_policy: AccessibilityFallbackPolicy,
    ) -> CoefficientStructurer {
        CoefficientStructurer {
            baseline_model_type: baseline_model_type.to_string(),
            default_s_max,
            fallback_policy,
        }
    }

    /// validates and folds every row of `table`.
    ///
    /// an empty table, or one where no row survives validation, yields empty
    /// structures. malformed rows and values are skipped and returned
    /// alongside the result.
    ///
    /// # Errors
    ///
    /// [`CoefficientError::MissingColumn`] if a required column is absent.
    pub fn structure(
        &self,
        table: &Table,
    ) -> Result<(StructuredCoefficients, Vec<CoefficientError>), CoefficientError> {
        if table.is_empty() {
            return Ok((StructuredCoefficients::empty(self.default_s_max), vec![]));
        }
        let columns = CoefficientColumns::try_from_table(table)?;
        let mut rows = Vec::with_capacity(table.len());
        let mut errors = vec![];
        for (index, record) in table.rows().iter().enumerate() {
            match CoefficientRow::parse(index, record, &columns, &self.baseline_model_type) {
                Ok((row, row_errors)) => {
                    rows.push(row);
                    errors.extend(row_errors);
                }
                Err(e) => errors.push(e),
            }
        }
        for e in errors.iter() {
            log::warn!("skipped: {e}");
        }
        if rows.is_empty() {
            return Ok((StructuredCoefficients::empty(self.default_s_max), errors));
        }
        Ok((self.fold(&rows), errors))
    }

    /// folds rows in order. rows for the same (category, indicator) add to
    /// one parameter map, and a repeated parameter name keeps the last value.
    ///
    /// PAI `w_<mode>` and `alpha` names also feed the accessibility weights.
    /// TCI `P_<mode>` and `c_<mode>` names feed the transfer convenience map
    /// instead of the generic map, and a TCI `S_max` sets the global ceiling.
    /// only `param1` is classified; `param2` always goes to the generic map.
    /// the fallback policy is applied to the accessibility weights last.
    pub fn fold(&self, rows: &[CoefficientRow]) -> StructuredCoefficients {
        let mut s_max = self.default_s_max;
        let mut model = ModelCoefficients::new(s_max);
        let mut accessibility = AccessibilityWeights::default();
        let mut transfer = TransferConvenience::new(s_max);

        for row in rows.iter() {
            let kpi = Kpi::from_code(&row.indicator);
            if kpi == Some(Kpi::Tci) {
                transfer.ensure_category(&row.category);
            }

            let mut param1_claimed = false;
            if let Some(param) = &row.param1 {
                match kpi {
                    Some(Kpi::Pai) => match classify_pai(&param.name) {
                        PaiParameter::Weight(mode) => {
                            accessibility.insert_weight(&row.category, mode, param.value)
                        }
                        PaiParameter::Alpha => accessibility.insert_alpha(&row.category, param.value),
                        PaiParameter::Other => {}
                    },
                    Some(Kpi::Tci) => match classify_tci(&param.name) {
                        TciParameter::Ceiling => s_max = param.value,
                        TciParameter::P(mode) => {
                            transfer
                                .ensure_category(&row.category)
                                .p
                                .insert(mode.to_string(), param.value);
                            param1_claimed = true;
                        }
                        TciParameter::C(mode) => {
                            transfer
                                .ensure_category(&row.category)
                                .c
                                .insert(mode.to_string(), param.value);
                            param1_claimed = true;
                        }
                        TciParameter::Other => {}
                    },
                    _ => {}
                }
            }

            let entry = model.entry(&row.category, &row.indicator, &row.model_type);
            if let Some(param) = row.param1.as_ref().filter(|_| !param1_claimed) {
                entry.params.insert(param.name.clone(), param.value);
            }
            if let Some(param) = &row.param2 {
                entry.params.insert(param.name.clone(), param.value);
            }
        }

        model.s_max = s_max;
        transfer.s_max = s_max;
        self.fallback_policy.apply(&mut accessibility);

        StructuredCoefficients {
            model,
            accessibility,
            transfer,
        }
    }
}
