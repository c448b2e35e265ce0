//! Negation scanner: local context check for primary phrases

use crate::NEGATION_WORDS;

/// Is any occurrence of `phrase` in `text` negated?
///
/// For each non-overlapping occurrence, the `window` words before it are
/// joined with single spaces and searched for any negation word as a
/// substring. One negated occurrence is enough to suppress the phrase for
/// the whole text. `text` must already be normalized.
pub fn is_negated(text: &str, phrase: &str, window: usize) -> bool {
    if phrase.is_empty() {
        return false;
    }

    text.match_indices(phrase).any(|(start, _)| {
        let words: Vec<&str> = text[..start].split_whitespace().collect();
        let preceding = words[words.len().saturating_sub(window)..].join(" ");
        NEGATION_WORDS.iter().any(|neg| preceding.contains(neg))
    })
}
