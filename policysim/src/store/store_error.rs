use super::DatasetKind;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("no modified or original {dataset} artifact found, expected original at '{location}'")]
    ArtifactNotFound {
        dataset: DatasetKind,
        location: String,
    },
    #[error("failed to decode '{location}' as UTF-8 or as legacy CP949 text")]
    DecodeFailure { location: String },
    #[error("failure reading '{location}': {source}")]
    ReadFailure {
        location: String,
        source: std::io::Error,
    },
    #[error("failure parsing {dataset} table: {source}")]
    CsvFailure {
        dataset: DatasetKind,
        source: csv::Error,
    },
    #[error("failure writing modified {dataset} artifact '{location}': {message}")]
    WriteFailure {
        dataset: DatasetKind,
        location: String,
        message: String,
    },
    #[error("failure removing modified {dataset} artifact '{location}': {source}")]
    RemovalFailure {
        dataset: DatasetKind,
        location: String,
        source: std::io::Error,
    },
    #[error("{0}")]
    ConfigurationError(String),
}
