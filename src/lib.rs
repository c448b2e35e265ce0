//! Mailarmor: rule-based email request type classifier
//!
//! Text → normalizer → scoring engine (with negation scanner) → arbitrator → result.
//! Every decision is explainable by the phrases and patterns that fired.

pub mod core;
pub mod types;

use crate::core::Classifier;
use crate::types::ClassificationResult;

// =============================================================================
// LABELS
// =============================================================================

/// Fallback label when no category reaches its threshold
pub const LABEL_NONE: &str = "none";

/// Reserved for the LLM decision layer, never produced by the rule engine
pub const LABEL_OTHER: &str = "other";

/// Labels a rule table may not declare as categories
pub const RESERVED_LABELS: [&str; 2] = [LABEL_NONE, LABEL_OTHER];

// =============================================================================
// NEGATION
// =============================================================================

/// Words preceding a primary phrase that are inspected for negation
pub const NEGATION_WINDOW: usize = 6;

/// Negation vocabulary, matched as substrings of the preceding word window
pub const NEGATION_WORDS: [&str; 8] = [
    "not", "no", "never", "don't", "do not", "cannot", "can't", "didn't",
];

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum emails accepted by one bulk classification
pub const MAX_BULK_EMAILS: usize = 100;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

/// Classify raw email text against the built-in rule table
pub fn classify(text: &str) -> ClassificationResult {
    Classifier::new().classify(text)
}
