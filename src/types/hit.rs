//! Audit trail entries

use serde::{Serialize, Serializer};

/// One rule hit that contributed to a category score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// Primary phrase, not negated
    Primary(String),
    /// Supporting phrase
    Support(String),
    /// Negative phrase with its (negative) weight
    Negative(String, i32),
    /// Regex pattern source
    Regex(String),
}

impl Hit {
    /// Tier tag as rendered in the audit trail
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Primary(_) => "primary",
            Self::Support(_) => "support",
            Self::Negative(..) => "negative",
            Self::Regex(_) => "regex",
        }
    }
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative(phrase, weight) => {
                write!(f, "[{}] {} ({})", self.tag(), quoted(phrase), weight)
            }
            Self::Primary(s) | Self::Support(s) | Self::Regex(s) => {
                write!(f, "[{}] {}", self.tag(), quoted(s))
            }
        }
    }
}

impl Serialize for Hit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Quote a phrase for display: single quotes, double quotes if the text holds
/// an apostrophe, backslashes doubled.
fn quoted(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\");
    if escaped.contains('\'') && !escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
