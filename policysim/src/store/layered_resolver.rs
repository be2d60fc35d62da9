use super::{DatasetKind, RestoreOutcome, StoreError, Table};

/// resolves each dataset from two layers: an immutable original and an
/// optional user-modified override. when the override exists it is
/// authoritative.
///
/// every call re-resolves against the backing storage; implementations hold
/// no cached copy of a resolved table.
pub trait LayeredResolver {
    /// true if an override currently exists for `dataset`.
    fn has_modified(&self, dataset: DatasetKind) -> bool;

    /// returns the override if present, otherwise the original.
    ///
    /// # Errors
    ///
    /// [`StoreError::ArtifactNotFound`] when neither layer exists. callers at
    /// the application boundary are expected to recover from this with an
    /// empty [`Table`].
    fn resolve(&self, dataset: DatasetKind) -> Result<Table, StoreError>;

    /// writes `table` as the override, fully replacing any previous one.
    fn save(&mut self, dataset: DatasetKind, table: &Table) -> Result<(), StoreError>;

    /// removes the override if present. restoring a dataset that has no
    /// override is a no-op reported as [`RestoreOutcome::AlreadyOriginal`].
    fn restore(&mut self, dataset: DatasetKind) -> Result<RestoreOutcome, StoreError>;

    /// restores every dataset kind. a failure on one dataset does not stop
    /// the others from being attempted.
    ///
    /// # Returns
    ///
    /// the merged outcome of the datasets that were restored, along with
    /// every removal failure.
    fn restore_all(&mut self) -> (RestoreOutcome, Vec<StoreError>) {
        let mut outcome = RestoreOutcome::AlreadyOriginal;
        let mut failures = vec![];
        for dataset in DatasetKind::ALL {
            match self.restore(dataset) {
                Ok(restored) => outcome = outcome.merge(restored),
                Err(e) => failures.push(e),
            }
        }
        (outcome, failures)
    }
}
