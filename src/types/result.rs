//! Classification results

use std::collections::BTreeMap;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::LABEL_NONE;

/// Outcome of one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category, or `none`
    pub label: String,
    /// Winner's cumulative score (0 for `none`)
    pub score: i32,
    /// Second eligible category
    pub runner_up: Option<String>,
    /// Runner-up's score (0 when absent)
    pub runner_up_score: i32,
    /// Winner's audit trail, in declaration order
    pub matched_phrases: Vec<String>,
    /// Raw score of every category, eligible or not
    pub all_scores: BTreeMap<String, i32>,
}

impl ClassificationResult {
    /// Fallback when no category reaches its threshold
    pub fn none(all_scores: BTreeMap<String, i32>) -> Self {
        Self {
            label: LABEL_NONE.to_string(),
            score: 0,
            runner_up: None,
            runner_up_score: 0,
            matched_phrases: Vec::new(),
            all_scores,
        }
    }

    pub fn is_none(&self) -> bool {
        self.label == LABEL_NONE
    }

    /// All category scores, highest first (ties by name)
    pub fn ranked_scores(&self) -> Vec<(&str, i32)> {
        let mut ranked: Vec<(&str, i32)> =
            self.all_scores.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let label = if self.is_none() {
            self.label.dimmed()
        } else {
            self.label.red().bold()
        };
        let runner_up = match &self.runner_up {
            Some(name) => format!("{} ({})", name, self.runner_up_score).yellow().to_string(),
            None => "-".dimmed().to_string(),
        };
        format!(
            "{} score={} | runner_up={} | hits={}",
            label,
            self.score.to_string().bold(),
            runner_up,
            self.matched_phrases.len()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "request_type={} | score={} | runner_up={} | runner_up_score={} | hits={}",
            self.label,
            self.score,
            self.runner_up.as_deref().unwrap_or("-"),
            self.runner_up_score,
            self.matched_phrases.len()
        )
    }
}

/// Per-email line of a bulk classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkItem {
    /// Position in the input list
    pub index: usize,
    pub request_type: String,
    pub confidence_score: i32,
    pub runner_up: Option<String>,
    pub runner_up_score: i32,
}

impl BulkItem {
    pub fn from_result(index: usize, result: ClassificationResult) -> Self {
        Self {
            index,
            request_type: result.label,
            confidence_score: result.score,
            runner_up: result.runner_up,
            runner_up_score: result.runner_up_score,
        }
    }
}
