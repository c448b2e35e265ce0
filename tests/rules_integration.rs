//! Integration tests for rule tables
//!
//! Threshold gating, declaration-order tie-break, look-ahead URL patterns and
//! startup validation of custom tables.

use mailarmor::core::{Classifier, RuleRepository};
use mailarmor::types::{PatternDef, RuleDef, RuleError};
use mailarmor::{classify, LABEL_NONE};

const fn primary_only(name: &'static str, primary: &'static [(&'static str, i32)], threshold: i32) -> RuleDef {
    RuleDef {
        name,
        description: "test category",
        threshold,
        primary,
        supporting: &[],
        negative: &[],
        patterns: &[],
    }
}

// =============================================================================
// THRESHOLD GATING
// =============================================================================

#[test]
fn test_highest_score_below_threshold_never_wins() {
    let rules = RuleRepository::from_defs(&[
        primary_only("loud", &[("loud signal", 50)], 100),
        primary_only("quiet", &[("quiet signal", 6)], 5),
    ])
    .unwrap();

    let result = Classifier::with_rules(&rules).classify("a loud signal and a quiet signal");

    assert_eq!(result.label, "quiet");
    assert_eq!(result.score, 6);
    assert_eq!(result.runner_up, None);
    assert_eq!(result.all_scores["loud"], 50);
}

#[test]
fn test_unreachable_threshold_is_none() {
    let rules = RuleRepository::from_defs(&[primary_only("loud", &[("loud", 5), ("louder", 5)], 11)]).unwrap();
    let result = Classifier::with_rules(&rules).classify("loud louder loudest");

    assert_eq!(result.label, LABEL_NONE);
    assert_eq!(result.all_scores["loud"], 10);
}

#[test]
fn test_builtin_thresholds_are_per_category() {
    // "download now" (8) meets document_download's threshold of 8 on its own
    let result = classify("Download now");
    assert_eq!(result.label, "document_download");
    assert_eq!(result.score, 8);

    // "click here" (8) falls short of link_click's threshold of 9
    let result = classify("Click here");
    assert_eq!(result.label, LABEL_NONE);
    assert_eq!(result.all_scores["link_click"], 8);
}

// =============================================================================
// TIE-BREAK
// =============================================================================

#[test]
fn test_tie_goes_to_first_declared() {
    let forward = RuleRepository::from_defs(&[
        primary_only("first", &[("first phrase", 10)], 10),
        primary_only("second", &[("second phrase", 10)], 10),
    ])
    .unwrap();
    let reversed = RuleRepository::from_defs(&[
        primary_only("second", &[("second phrase", 10)], 10),
        primary_only("first", &[("first phrase", 10)], 10),
    ])
    .unwrap();

    // Text order must not matter, only declaration order
    for text in ["first phrase then second phrase", "second phrase then first phrase"] {
        let result = Classifier::with_rules(&forward).classify(text);
        assert_eq!(result.label, "first");
        assert_eq!(result.runner_up.as_deref(), Some("second"));
        assert_eq!(result.runner_up_score, 10);

        let result = Classifier::with_rules(&reversed).classify(text);
        assert_eq!(result.label, "second");
        assert_eq!(result.runner_up.as_deref(), Some("first"));
    }
}

#[test]
fn test_runner_up_audit_trail_discarded() {
    let rules = RuleRepository::from_defs(&[
        primary_only("winner", &[("big", 20)], 10),
        primary_only("loser", &[("small", 10)], 10),
    ])
    .unwrap();
    let result = Classifier::with_rules(&rules).classify("big small");

    assert_eq!(result.label, "winner");
    assert_eq!(result.matched_phrases, vec!["[primary] 'big'".to_string()]);
}

// =============================================================================
// URL PATTERNS
// =============================================================================

const LINK_PATTERN_HIT: &str = r"[regex] 'https?://(?!(?:www\\.)?(microsoft|google|apple|amazon)\\.com)[^\\s]{15,}'";
const MEETING_PATTERN_HIT: &str =
    r"[regex] 'https?://(?!zoom\\.us|teams\\.microsoft\\.com|meet\\.google\\.com)[^\\s]+(?:zoom|meet|meeting|conference)[^\\s]*'";

#[test]
fn test_vendor_url_does_not_score() {
    let result = classify("Please click here to sign in: https://www.google.com/accounts/signin/v2");
    assert_eq!(result.label, LABEL_NONE);
    assert_eq!(result.all_scores["link_click"], 8);
}

#[test]
fn test_lookalike_url_scores() {
    let result = classify("Please click here to sign in: https://google-accounts.security-check.net/signin");
    assert_eq!(result.label, "link_click");
    assert_eq!(result.score, 11);
    assert_eq!(
        result.matched_phrases,
        vec!["[primary] 'click here'".to_string(), LINK_PATTERN_HIT.to_string()]
    );
}

#[test]
fn test_redirect_behind_vendor_url_scores() {
    // The vendor host only excludes its own URL; the embedded target is still a link
    let result =
        classify("Please click here to sign in: https://www.google.com/url?q=https://evil-phish.example.net/login");
    assert_eq!(result.label, "link_click");
    assert_eq!(result.score, 11);
    assert_eq!(
        result.matched_phrases,
        vec!["[primary] 'click here'".to_string(), LINK_PATTERN_HIT.to_string()]
    );
}

#[test]
fn test_real_conferencing_host_not_flagged() {
    let real = classify("Your meeting invitation: join the meeting at https://zoom.us/j/123456789");
    let fake = classify("Your meeting invitation: join the meeting at https://company-zoom.example.net/j/123");

    assert_eq!(real.label, "meeting_request");
    assert_eq!(real.score, 17);
    assert!(!real.matched_phrases.iter().any(|h| h.starts_with("[regex] ")));
    assert_eq!(fake.label, "meeting_request");
    assert_eq!(fake.score, 22);
    assert_eq!(fake.matched_phrases.last().map(String::as_str), Some(MEETING_PATTERN_HIT));
}

#[test]
fn test_meeting_url_nested_in_conferencing_url_scores() {
    let result = classify("join the meeting https://zoom.us/j/1?r=https://evil.example/meeting");

    assert_eq!(result.label, "meeting_request");
    assert_eq!(result.score, 14);
    assert_eq!(
        result.matched_phrases,
        vec!["[primary] 'join the meeting'".to_string(), MEETING_PATTERN_HIT.to_string()]
    );
    assert_eq!(result.all_scores["link_click"], 3);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_broken_pattern_fails_at_load() {
    const BROKEN: &[RuleDef] = &[RuleDef {
        name: "broken",
        description: "",
        threshold: 1,
        primary: &[],
        supporting: &[],
        negative: &[],
        patterns: &[PatternDef::new(r"[unterminated", 1)],
    }];

    match RuleRepository::from_defs(BROKEN) {
        Err(RuleError::InvalidPattern { category, pattern, .. }) => {
            assert_eq!(category, "broken");
            assert_eq!(pattern, "[unterminated");
        }
        other => panic!("expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_empty_phrase_rejected() {
    let err = RuleRepository::from_defs(&[primary_only("blank", &[("  ", 3)], 1)]).unwrap_err();
    assert!(matches!(err, RuleError::EmptyPhrase { tier: "primary", .. }));
}

#[test]
fn test_builtin_table_is_valid() {
    let rules = RuleRepository::try_builtin().expect("built-in rules validate");
    for rule in rules {
        assert!(rule.threshold > 0, "{} threshold", rule.name);
        assert!(!rule.primary.is_empty(), "{} has no primary phrases", rule.name);
        assert!(rule.negative.iter().all(|p| p.weight < 0), "{} negative weights", rule.name);
    }
}
