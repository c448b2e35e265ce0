//! Classifier: normalize → score → arbitrate

use tracing::debug;

use crate::core::arbitrator::arbitrate;
use crate::core::normalizer::normalize;
use crate::core::scoring::score;
use crate::core::RuleRepository;
use crate::types::{BulkItem, ClassificationResult, ClassifyError, EmailInput};
use crate::MAX_BULK_EMAILS;

/// Request type classifier over a rule repository
///
/// Holds only a shared reference to immutable rules, so it is `Copy` and can
/// be used from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'r> {
    rules: &'r RuleRepository,
}

impl Classifier<'static> {
    /// Classifier over the built-in rule table
    pub fn new() -> Self {
        Self { rules: RuleRepository::builtin() }
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Classifier<'r> {
    /// Classifier over a custom rule table
    pub fn with_rules(rules: &'r RuleRepository) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleRepository {
        self.rules
    }

    /// Classify raw text
    pub fn classify(&self, raw: &str) -> ClassificationResult {
        let text = normalize(raw);
        let result = arbitrate(score(&text, self.rules));
        debug!(
            label = %result.label,
            score = result.score,
            runner_up = ?result.runner_up,
            hits = result.matched_phrases.len(),
            "classified"
        );
        result
    }

    /// Classify subject + body joined with a single space
    pub fn classify_email(&self, email: &EmailInput) -> ClassificationResult {
        self.classify(&email.combined_text())
    }

    /// Classify up to `MAX_BULK_EMAILS` emails, results in input order
    ///
    /// Oversize batches are rejected before any email is scored.
    pub fn classify_bulk(&self, emails: &[EmailInput]) -> Result<Vec<BulkItem>, ClassifyError> {
        if emails.len() > MAX_BULK_EMAILS {
            return Err(ClassifyError::BulkTooLarge {
                count: emails.len(),
                max: MAX_BULK_EMAILS,
            });
        }

        Ok(emails
            .iter()
            .enumerate()
            .map(|(index, email)| BulkItem::from_result(index, self.classify_email(email)))
            .collect())
    }
}
