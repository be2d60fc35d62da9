use super::{Diagnostic, Loaded, RestoreReport, RestoreTarget};
use crate::{
    coefficient::{CoefficientStructurer, StructuredCoefficients},
    store::{policy_ops, DatasetKind, LayeredResolver, StoreError, Table},
};

/// the entry points a presentation layer calls into. reads never return a
/// missing value: an absent dataset comes back empty with an error
/// [`Diagnostic`]. only a read that fails after an artifact was found (for
/// instance a decode failure) is returned as an `Err`.
pub struct DataService<R: LayeredResolver> {
    store: R,
    structurer: CoefficientStructurer,
}

impl<R: LayeredResolver> DataService<R> {
    pub fn new(store: R, structurer: CoefficientStructurer) -> DataService<R> {
        DataService { store, structurer }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn structurer(&self) -> &CoefficientStructurer {
        &self.structurer
    }

    /// the policy list with every `duration_months` value normalized to a
    /// whole number of months.
    pub fn get_policy_table(&self) -> Result<Loaded<Table>, StoreError> {
        let mut loaded = self.resolve_or_empty(DatasetKind::Policy)?;
        if !loaded.value.headers().is_empty()
            && !policy_ops::normalize_durations(&mut loaded.value)
        {
            loaded = loaded.with_diagnostic(Diagnostic::warning(format!(
                "policy list has no '{}' column, durations left as-is",
                policy_ops::DURATION_COLUMN
            )));
        }
        Ok(loaded)
    }

    /// the coefficient table as stored, without structuring.
    pub fn get_coefficient_table_raw(&self) -> Result<Loaded<Table>, StoreError> {
        self.resolve_or_empty(DatasetKind::Coefficients)
    }

    /// the coefficient table folded into its three derived structures. rows
    /// or values that could not be used are reported as warnings; a table
    /// without the required columns yields empty structures and an error.
    pub fn get_structured_coefficients(
        &self,
    ) -> Result<Loaded<StructuredCoefficients>, StoreError> {
        let Loaded {
            value: table,
            mut diagnostics,
        } = self.get_coefficient_table_raw()?;
        let structured = match self.structurer.structure(&table) {
            Ok((structured, errors)) => {
                diagnostics.extend(errors.iter().map(|e| Diagnostic::warning(e.to_string())));
                structured
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(e.to_string()));
                StructuredCoefficients::empty(self.structurer.default_s_max)
            }
        };
        Ok(Loaded {
            value: structured,
            diagnostics,
        })
    }

    pub fn save_policy_table(&mut self, table: &Table) -> Result<(), StoreError> {
        self.store.save(DatasetKind::Policy, table)
    }

    pub fn save_coefficient_table(&mut self, table: &Table) -> Result<(), StoreError> {
        self.store.save(DatasetKind::Coefficients, table)
    }

    pub fn restore_policy(&mut self) -> RestoreReport {
        self.restore(RestoreTarget::Policy)
    }

    pub fn restore_coefficients(&mut self) -> RestoreReport {
        self.restore(RestoreTarget::Coefficients)
    }

    pub fn restore_all(&mut self) -> RestoreReport {
        self.restore(RestoreTarget::All)
    }

    pub fn restore(&mut self, target: RestoreTarget) -> RestoreReport {
        match target {
            RestoreTarget::Policy => {
                RestoreReport::from_result(target, self.store.restore(DatasetKind::Policy))
            }
            RestoreTarget::Coefficients => {
                RestoreReport::from_result(target, self.store.restore(DatasetKind::Coefficients))
            }
            RestoreTarget::All => {
                let (outcome, failures) = self.store.restore_all();
                RestoreReport::new(target, outcome, failures)
            }
        }
    }

    fn resolve_or_empty(&self, dataset: DatasetKind) -> Result<Loaded<Table>, StoreError> {
        match self.store.resolve(dataset) {
            Ok(table) => Ok(Loaded::new(table)),
            Err(e @ StoreError::ArtifactNotFound { .. }) => Ok(Loaded::new(Table::empty())
                .with_diagnostic(Diagnostic::error(format!(
                    "{} unavailable: {e}",
                    dataset.description()
                )))),
            Err(e) => Err(e),
        }
    }
}
