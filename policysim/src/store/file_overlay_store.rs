use super::{
    encoding_ops, ArtifactFiles, DatasetKind, LayeredResolver, RestoreOutcome, StoreError, Table,
};
use std::path::{Path, PathBuf};

/// a [`LayeredResolver`] over files in a data directory. presence of the
/// modified file on disk decides which layer is read.
///
/// saves are full-file overwrites with no locking; the store expects a single
/// writer.
#[derive(Clone, Debug)]
pub struct FileOverlayStore {
    data_directory: PathBuf,
    policy_files: ArtifactFiles,
    coefficients_files: ArtifactFiles,
}

impl FileOverlayStore {
    /// opens a store rooted at `data_directory`, creating the directory if
    /// it does not exist.
    pub fn new<P: AsRef<Path>>(
        data_directory: P,
        policy_files: ArtifactFiles,
        coefficients_files: ArtifactFiles,
    ) -> Result<FileOverlayStore, StoreError> {
        let data_directory = data_directory.as_ref().to_path_buf();
        create_dirs(&data_directory)?;
        Ok(FileOverlayStore {
            data_directory,
            policy_files,
            coefficients_files,
        })
    }

    /// opens a store with the default artifact filenames.
    pub fn with_default_layout<P: AsRef<Path>>(
        data_directory: P,
    ) -> Result<FileOverlayStore, StoreError> {
        FileOverlayStore::new(
            data_directory,
            ArtifactFiles::default_for(DatasetKind::Policy),
            ArtifactFiles::default_for(DatasetKind::Coefficients),
        )
    }

    pub fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    pub fn original_path(&self, dataset: DatasetKind) -> PathBuf {
        self.data_directory.join(&self.files(dataset).original)
    }

    pub fn modified_path(&self, dataset: DatasetKind) -> PathBuf {
        self.data_directory.join(&self.files(dataset).modified)
    }

    fn files(&self, dataset: DatasetKind) -> &ArtifactFiles {
        match dataset {
            DatasetKind::Policy => &self.policy_files,
            DatasetKind::Coefficients => &self.coefficients_files,
        }
    }
}

impl LayeredResolver for FileOverlayStore {
    fn has_modified(&self, dataset: DatasetKind) -> bool {
        self.modified_path(dataset).is_file()
    }

    fn resolve(&self, dataset: DatasetKind) -> Result<Table, StoreError> {
        let modified = self.modified_path(dataset);
        let path = if modified.is_file() {
            log::debug!("resolving {dataset} from modified artifact {modified:?}");
            modified
        } else {
            let original = self.original_path(dataset);
            if !original.is_file() {
                log::warn!("{} not found at {original:?}", dataset.description());
                return Err(StoreError::ArtifactNotFound {
                    dataset,
                    location: original.to_string_lossy().to_string(),
                });
            }
            log::debug!("resolving {dataset} from original artifact {original:?}");
            original
        };
        let text = encoding_ops::read_with_fallback(&path)?;
        Table::from_text(&text, dataset.delimiter())
            .map_err(|source| StoreError::CsvFailure { dataset, source })
    }

    fn save(&mut self, dataset: DatasetKind, table: &Table) -> Result<(), StoreError> {
        let path = self.modified_path(dataset);
        let location = path.to_string_lossy().to_string();
        let bytes = table
            .to_bytes(dataset.delimiter())
            .map_err(|e| StoreError::WriteFailure {
                dataset,
                location: location.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&path, bytes).map_err(|e| StoreError::WriteFailure {
            dataset,
            location,
            message: e.to_string(),
        })?;
        log::info!(
            "saved modified {dataset} artifact with {} rows to {path:?}",
            table.len()
        );
        Ok(())
    }

    fn restore(&mut self, dataset: DatasetKind) -> Result<RestoreOutcome, StoreError> {
        let path = self.modified_path(dataset);
        if !path.exists() {
            log::info!("{dataset} already in original state");
            return Ok(RestoreOutcome::AlreadyOriginal);
        }
        std::fs::remove_file(&path).map_err(|source| StoreError::RemovalFailure {
            dataset,
            location: path.to_string_lossy().to_string(),
            source,
        })?;
        log::info!("removed modified {dataset} artifact {path:?}");
        Ok(RestoreOutcome::Removed)
    }
}

/// helper function to "mkdir -p path" - make all directories along a path
fn create_dirs(path: &Path) -> Result<(), StoreError> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|e| {
            StoreError::ConfigurationError(format!(
                "error building data directory '{}': {e}",
                path.to_str().unwrap_or_default()
            ))
        })
    } else {
        Ok(())
    }
}
