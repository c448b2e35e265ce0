//! Core types for Mailarmor

mod rule;
mod hit;
mod result;
mod email;
mod error;

pub use rule::{PhraseDef, PatternDef, RuleDef, WeightedPhrase, WeightedPattern, CategoryRule};
pub use hit::Hit;
pub use result::{ClassificationResult, BulkItem};
pub use email::EmailInput;
pub use error::{RuleError, ClassifyError};
