//! Rule repository: immutable, ordered table of compiled category rules

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::debug;

use crate::core::rule_table::BUILTIN_RULES;
use crate::types::{CategoryRule, RuleDef, RuleError};
use crate::RESERVED_LABELS;

lazy_static! {
    static ref BUILTIN: Result<RuleRepository, RuleError> = RuleRepository::from_defs(BUILTIN_RULES);
}

/// Compiled rule table
///
/// Iteration follows declaration order, which is the tie-break order of the
/// arbitrator. Lookup by name goes through a side index.
#[derive(Debug)]
pub struct RuleRepository {
    rules: Vec<CategoryRule>,
    index: HashMap<String, usize>,
}

impl RuleRepository {
    /// Compile and validate a declared table
    pub fn from_defs(defs: &[RuleDef]) -> Result<Self, RuleError> {
        let mut rules = Vec::with_capacity(defs.len());
        let mut index = HashMap::with_capacity(defs.len());

        for def in defs {
            if RESERVED_LABELS.contains(&def.name) {
                return Err(RuleError::ReservedLabel(def.name.to_string()));
            }
            if index.contains_key(def.name) {
                return Err(RuleError::DuplicateCategory(def.name.to_string()));
            }
            index.insert(def.name.to_string(), rules.len());
            rules.push(CategoryRule::from_def(def)?);
        }

        debug!(categories = rules.len(), "rule table compiled");
        Ok(Self { rules, index })
    }

    /// Built-in table, or the error it failed validation with
    pub fn try_builtin() -> Result<&'static Self, &'static RuleError> {
        BUILTIN.as_ref()
    }

    /// Built-in table
    ///
    /// Panics if the table is invalid; binaries call `try_builtin` at
    /// startup so a broken table aborts before serving anything.
    pub fn builtin() -> &'static Self {
        match Self::try_builtin() {
            Ok(rules) => rules,
            Err(e) => panic!("built-in rule table is invalid: {}", e),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CategoryRule> {
        self.index.get(name).map(|&i| &self.rules[i])
    }

    /// Rules in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryRule> {
        self.rules.iter()
    }

    /// Category names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleRepository {
    type Item = &'a CategoryRule;
    type IntoIter = std::slice::Iter<'a, CategoryRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn row(name: &'static str) -> RuleDef {
        RuleDef {
            name,
            description: "",
            threshold: 1,
            primary: &[("alpha", 1)],
            supporting: &[],
            negative: &[],
            patterns: &[],
        }
    }

    #[test]
    fn test_builtin_loads() {
        let rules = RuleRepository::try_builtin().expect("built-in table should validate");
        assert_eq!(rules.len(), 14);
        assert_eq!(rules.names()[0], "invoice_payment");
        assert_eq!(rules.names()[13], "meeting_request");
    }

    #[test]
    fn test_declaration_order_preserved() {
        let rules = RuleRepository::from_defs(&[row("zeta"), row("alpha"), row("mid")]).unwrap();
        assert_eq!(rules.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_lookup_by_name() {
        let rules = RuleRepository::from_defs(&[row("one"), row("two")]).unwrap();
        assert_eq!(rules.get("two").map(|r| r.name.as_str()), Some("two"));
        assert!(rules.get("three").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = RuleRepository::from_defs(&[row("one"), row("one")]).unwrap_err();
        assert!(matches!(err, RuleError::DuplicateCategory(name) if name == "one"));
    }

    #[test]
    fn test_reserved_labels_rejected() {
        assert!(matches!(
            RuleRepository::from_defs(&[row("none")]),
            Err(RuleError::ReservedLabel(_))
        ));
        assert!(matches!(
            RuleRepository::from_defs(&[row("other")]),
            Err(RuleError::ReservedLabel(_))
        ));
    }

    #[test]
    fn test_empty_table() {
        let rules = RuleRepository::from_defs(&[]).unwrap();
        assert!(rules.is_empty());
    }
}
