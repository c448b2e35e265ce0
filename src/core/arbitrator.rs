//! Arbitrator: threshold gating, ranking, winner and runner-up

use crate::core::scoring::{CategoryScore, ScoreSheet};
use crate::types::ClassificationResult;

/// Pick the winner from a score sheet
///
/// Only categories at or above their own threshold are eligible. Eligible
/// categories rank by score; equal scores keep sheet (declaration) order.
/// Only the winner's audit trail is kept.
pub fn arbitrate(sheet: ScoreSheet<'_>) -> ClassificationResult {
    let all_scores = sheet.all_scores();

    let mut eligible: Vec<CategoryScore<'_>> = sheet
        .categories
        .into_iter()
        .filter(CategoryScore::is_eligible)
        .collect();

    if eligible.is_empty() {
        return ClassificationResult::none(all_scores);
    }

    // Stable sort: ties stay in declaration order
    eligible.sort_by(|a, b| b.score.cmp(&a.score));

    let mut ranked = eligible.into_iter();
    let winner = match ranked.next() {
        Some(winner) => winner,
        None => return ClassificationResult::none(all_scores),
    };
    let runner_up = ranked.next();

    ClassificationResult {
        label: winner.rule.name.clone(),
        score: winner.score,
        runner_up: runner_up.as_ref().map(|c| c.rule.name.clone()),
        runner_up_score: runner_up.as_ref().map_or(0, |c| c.score),
        matched_phrases: winner.hits.iter().map(ToString::to_string).collect(),
        all_scores,
    }
}
