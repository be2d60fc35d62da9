mod accessibility_fallback_policy;
mod accessibility_weights;
mod coefficient_error;
mod coefficient_row;
mod coefficient_structurer;
mod model_coefficients;
mod structured_coefficients;
mod transfer_convenience;

pub use accessibility_fallback_policy::AccessibilityFallbackPolicy;
pub use accessibility_weights::AccessibilityWeights;
pub use coefficient_error::CoefficientError;
pub use coefficient_row::{CoefficientColumns, CoefficientRow, NamedParameter};
pub use coefficient_structurer::CoefficientStructurer;
pub use model_coefficients::{KpiParameters, ModelCoefficients};
pub use structured_coefficients::StructuredCoefficients;
pub use transfer_convenience::{ModeParameters, TransferConvenience};
