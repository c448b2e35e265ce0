//! Error types for Mailarmor

/// Rule table validation errors. Fatal at startup, never raised per request.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern in category {category}: {pattern}: {source}")]
    InvalidPattern {
        category: String,
        pattern: String,
        source: Box<fancy_regex::Error>,
    },

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Reserved label cannot be a category: {0}")]
    ReservedLabel(String),

    #[error("Empty {tier} phrase in category {category}")]
    EmptyPhrase { category: String, tier: &'static str },

    #[error("Negative phrase {phrase:?} in category {category} must have a negative weight, got {weight}")]
    NonNegativeWeight {
        category: String,
        phrase: String,
        weight: i32,
    },
}

/// Errors surfaced by classification entry points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Maximum {max} emails per bulk request.")]
    BulkTooLarge { count: usize, max: usize },
}
