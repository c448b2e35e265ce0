//! Scoring engine: per-category integer scores with an audit trail

use std::collections::BTreeMap;

use crate::core::negation::is_negated;
use crate::core::RuleRepository;
use crate::types::{CategoryRule, Hit};
use crate::NEGATION_WINDOW;

/// Score and hits of one category
#[derive(Debug, Clone)]
pub struct CategoryScore<'r> {
    pub rule: &'r CategoryRule,
    /// Cumulative score, may be negative
    pub score: i32,
    /// Hits in declaration order: primary, supporting, negative, regex
    pub hits: Vec<Hit>,
}

impl CategoryScore<'_> {
    pub fn name(&self) -> &str {
        &self.rule.name
    }

    /// Reached this category's own threshold?
    pub fn is_eligible(&self) -> bool {
        self.rule.accepts(self.score)
    }
}

/// Scores of every category, in repository order
#[derive(Debug, Clone)]
pub struct ScoreSheet<'r> {
    pub categories: Vec<CategoryScore<'r>>,
}

impl<'r> ScoreSheet<'r> {
    pub fn get(&self, name: &str) -> Option<&CategoryScore<'r>> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn score_of(&self, name: &str) -> Option<i32> {
        self.get(name).map(|c| c.score)
    }

    /// Raw score of every category
    pub fn all_scores(&self) -> BTreeMap<String, i32> {
        self.categories
            .iter()
            .map(|c| (c.name().to_string(), c.score))
            .collect()
    }
}

/// Score normalized `text` against every rule
pub fn score<'r>(text: &str, rules: &'r RuleRepository) -> ScoreSheet<'r> {
    ScoreSheet {
        categories: rules.iter().map(|rule| score_category(text, rule)).collect(),
    }
}

/// Score normalized `text` against one rule
///
/// Purely additive. A primary phrase is checked once per text: it scores if
/// present and none of its occurrences is negated.
pub fn score_category<'r>(text: &str, rule: &'r CategoryRule) -> CategoryScore<'r> {
    let mut score = 0;
    let mut hits = Vec::new();

    for p in &rule.primary {
        if text.contains(p.phrase.as_str()) && !is_negated(text, &p.phrase, NEGATION_WINDOW) {
            score += p.weight;
            hits.push(Hit::Primary(p.phrase.clone()));
        }
    }

    for p in &rule.supporting {
        if text.contains(p.phrase.as_str()) {
            score += p.weight;
            hits.push(Hit::Support(p.phrase.clone()));
        }
    }

    for p in &rule.negative {
        if text.contains(p.phrase.as_str()) {
            score += p.weight;
            hits.push(Hit::Negative(p.phrase.clone(), p.weight));
        }
    }

    for pattern in &rule.patterns {
        if pattern.is_match(text) {
            score += pattern.weight();
            hits.push(Hit::Regex(pattern.source().to_string()));
        }
    }

    CategoryScore { rule, score, hits }
}
