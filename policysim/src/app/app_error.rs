use crate::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum PolicySimAppError {
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error("failure writing output: {0}")]
    OutputError(String),
    #[error("{0}")]
    RestoreFailed(String),
}
