#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoefficientError {
    #[error("coefficient row {row}: column '{column}' has value '{value}' which {reason}")]
    MalformedRow {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },
    #[error("coefficient table is missing required column '{0}'")]
    MissingColumn(String),
}
