//! Rule definitions: declarative table rows and their compiled form

use fancy_regex::Regex;
use tracing::warn;

use crate::types::RuleError;

/// Declared phrase row: (literal, weight)
pub type PhraseDef = (&'static str, i32);

/// Declared regex row
///
/// Patterns may use look-around (`(?!...)`), so they compile with
/// `fancy_regex` and keep the exact source shown in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDef {
    pub pattern: &'static str,
    pub weight: i32,
}

impl PatternDef {
    pub const fn new(pattern: &'static str, weight: i32) -> Self {
        Self { pattern, weight }
    }
}

/// One category as declared in a rule table
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// Label assigned when this category wins
    pub name: &'static str,
    /// Human-readable description, served by the categories listing
    pub description: &'static str,
    /// Minimum cumulative score to be eligible to win
    pub threshold: i32,
    /// Category-defining phrases, subject to negation suppression
    pub primary: &'static [PhraseDef],
    /// Corroborating phrases, never suppressed
    pub supporting: &'static [PhraseDef],
    /// Disconfirming phrases, weights stored negative
    pub negative: &'static [PhraseDef],
    /// Structural evidence (URLs, phone numbers)
    pub patterns: &'static [PatternDef],
}

/// Literal phrase with its weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedPhrase {
    pub phrase: String,
    pub weight: i32,
}

impl WeightedPhrase {
    pub fn new(phrase: impl Into<String>, weight: i32) -> Self {
        Self { phrase: phrase.into(), weight }
    }
}

/// Compiled regex row; contributes its weight once however often it matches
#[derive(Debug, Clone)]
pub struct WeightedPattern {
    source: String,
    regex: Regex,
    weight: i32,
}

impl WeightedPattern {
    /// Compile a declared pattern for `category`
    pub fn compile(def: &PatternDef, category: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(def.pattern).map_err(|source| RuleError::InvalidPattern {
            category: category.to_string(),
            pattern: def.pattern.to_string(),
            source: Box::new(source),
        })?;

        Ok(Self {
            source: def.pattern.to_string(),
            regex,
            weight: def.weight,
        })
    }

    /// Pattern source as declared
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// True if the pattern matches anywhere in `text`
    ///
    /// A search that exceeds the backtracking limit counts as no match.
    pub fn is_match(&self, text: &str) -> bool {
        match self.regex.is_match(text) {
            Ok(matched) => matched,
            Err(e) => {
                warn!(pattern = %self.source, "pattern search aborted: {}", e);
                false
            }
        }
    }
}

/// Compiled, immutable rule for one category
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub name: String,
    pub description: String,
    pub primary: Vec<WeightedPhrase>,
    pub supporting: Vec<WeightedPhrase>,
    pub negative: Vec<WeightedPhrase>,
    pub patterns: Vec<WeightedPattern>,
    pub threshold: i32,
}

impl CategoryRule {
    /// Compile and validate a declared row
    ///
    /// Rejects empty phrases, non-negative weights in the negative tier and
    /// patterns that do not compile.
    pub fn from_def(def: &RuleDef) -> Result<Self, RuleError> {
        let primary = phrases(def.name, "primary", def.primary)?;
        let supporting = phrases(def.name, "supporting", def.supporting)?;
        let negative = phrases(def.name, "negative", def.negative)?;

        if let Some(p) = negative.iter().find(|p| p.weight >= 0) {
            return Err(RuleError::NonNegativeWeight {
                category: def.name.to_string(),
                phrase: p.phrase.clone(),
                weight: p.weight,
            });
        }

        let patterns = def
            .patterns
            .iter()
            .map(|p| WeightedPattern::compile(p, def.name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: def.name.to_string(),
            description: def.description.to_string(),
            primary,
            supporting,
            negative,
            patterns,
            threshold: def.threshold,
        })
    }

    /// Can this category win with `score`?
    pub fn accepts(&self, score: i32) -> bool {
        score >= self.threshold
    }
}

fn phrases(
    category: &str,
    tier: &'static str,
    rows: &[PhraseDef],
) -> Result<Vec<WeightedPhrase>, RuleError> {
    rows.iter()
        .map(|&(phrase, weight)| {
            if phrase.trim().is_empty() {
                Err(RuleError::EmptyPhrase { category: category.to_string(), tier })
            } else {
                // Matching runs on lower-cased text
                Ok(WeightedPhrase::new(phrase.to_lowercase(), weight))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(negative: &'static [PhraseDef], patterns: &'static [PatternDef]) -> RuleDef {
        RuleDef {
            name: "sample",
            description: "Sample category",
            threshold: 5,
            primary: &[("Pay Now", 5)],
            supporting: &[],
            negative,
            patterns,
        }
    }

    #[test]
    fn test_phrases_are_lowercased() {
        let rule = CategoryRule::from_def(&def(&[], &[])).unwrap();
        assert_eq!(rule.primary[0].phrase, "pay now");
    }

    #[test]
    fn test_positive_negative_weight_rejected() {
        let err = CategoryRule::from_def(&def(&[("paid", 3)], &[])).unwrap_err();
        assert!(matches!(err, RuleError::NonNegativeWeight { weight: 3, .. }));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        const BAD: &[PatternDef] = &[PatternDef::new(r"(unclosed", 2)];
        let err = CategoryRule::from_def(&def(&[], BAD)).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_lookahead_blocks_only_listed_hosts() {
        let pattern = WeightedPattern::compile(
            &PatternDef::new(r"https?://(?!(?:www\.)?example\.com)[^\s]{15,}", 3),
            "sample",
        )
        .unwrap();

        assert!(!pattern.is_match("see https://www.example.com/account/settings"));
        assert!(pattern.is_match("see https://example-login.attacker.net/verify"));
        assert!(pattern.is_match(
            "https://example.com/account/settings or https://login.attacker.net/x"
        ));
        // Redirect target inside a listed-host URL is still searched
        assert!(pattern.is_match("https://www.example.com/url?q=https://login.attacker.net/x"));
        assert_eq!(pattern.source(), r"https?://(?!(?:www\.)?example\.com)[^\s]{15,}");
    }

    #[test]
    fn test_accepts_at_threshold() {
        let rule = CategoryRule::from_def(&def(&[], &[])).unwrap();
        assert!(rule.accepts(5));
        assert!(!rule.accepts(4));
    }
}
