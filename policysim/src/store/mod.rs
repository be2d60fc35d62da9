mod artifact_files;
mod dataset_kind;
mod file_overlay_store;
mod in_memory_overlay_store;
mod layered_resolver;
mod restore_outcome;
mod store_error;
mod table;

pub mod encoding_ops;
pub mod policy_ops;

pub use artifact_files::ArtifactFiles;
pub use dataset_kind::DatasetKind;
pub use file_overlay_store::FileOverlayStore;
pub use in_memory_overlay_store::InMemoryOverlayStore;
pub use layered_resolver::LayeredResolver;
pub use restore_outcome::RestoreOutcome;
pub use store_error::StoreError;
pub use table::Table;
