//! Email input as accepted by the classifier

use serde::{Deserialize, Serialize};

/// Subject + body of one email
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    /// Optional; treated as empty when absent or null
    #[serde(default)]
    pub subject: Option<String>,
    pub body: String,
    /// Surface every category's score in the response
    #[serde(default)]
    pub include_debug: bool,
}

impl EmailInput {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            body: body.into(),
            include_debug: false,
        }
    }

    /// Body only, no subject
    pub fn body_only(body: impl Into<String>) -> Self {
        Self {
            subject: None,
            body: body.into(),
            include_debug: false,
        }
    }

    pub fn with_debug(mut self, include_debug: bool) -> Self {
        self.include_debug = include_debug;
        self
    }

    /// Subject and body joined with a single space
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.subject.as_deref().unwrap_or(""), self.body)
    }
}
