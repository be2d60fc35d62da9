use super::{DatasetKind, LayeredResolver, RestoreOutcome, StoreError, Table};
use std::collections::HashMap;

/// a [`LayeredResolver`] held entirely in memory. stands in for the file
/// store when the host supplies originals from elsewhere, and in tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryOverlayStore {
    originals: HashMap<DatasetKind, Table>,
    modified: HashMap<DatasetKind, Table>,
}

impl InMemoryOverlayStore {
    pub fn new() -> InMemoryOverlayStore {
        InMemoryOverlayStore::default()
    }

    /// sets the immutable original for `dataset`.
    pub fn with_original(mut self, dataset: DatasetKind, table: Table) -> InMemoryOverlayStore {
        self.originals.insert(dataset, table);
        self
    }
}

impl LayeredResolver for InMemoryOverlayStore {
    fn has_modified(&self, dataset: DatasetKind) -> bool {
        self.modified.contains_key(&dataset)
    }

    fn resolve(&self, dataset: DatasetKind) -> Result<Table, StoreError> {
        self.modified
            .get(&dataset)
            .or_else(|| self.originals.get(&dataset))
            .cloned()
            .ok_or_else(|| StoreError::ArtifactNotFound {
                dataset,
                location: format!("memory://{dataset}"),
            })
    }

    fn save(&mut self, dataset: DatasetKind, table: &Table) -> Result<(), StoreError> {
        self.modified.insert(dataset, table.clone());
        Ok(())
    }

    fn restore(&mut self, dataset: DatasetKind) -> Result<RestoreOutcome, StoreError> {
        match self.modified.remove(&dataset) {
            Some(_) => Ok(RestoreOutcome::Removed),
            None => Ok(RestoreOutcome::AlreadyOriginal),
        }
    }
}
