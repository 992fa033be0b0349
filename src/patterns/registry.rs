use super::rules::{PatternRule, RuleTable, StyleRuleConfig};
use crate::core::{ApiStyle, Error, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

static BUILTIN: Lazy<PatternRegistry> = Lazy::new(|| {
    PatternRegistry::from_rules(&RuleTable::builtin()).expect("builtin rule table compiles")
});

/// A single case-insensitive trigger.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` as a case-insensitive regular expression, or as an
    /// escaped substring when `literal` is set.
    pub fn compile(source: &str, literal: bool) -> std::result::Result<Self, regex::Error> {
        let expr = if literal {
            regex::escape(source)
        } else {
            source.to_string()
        };
        let regex = RegexBuilder::new(&expr).case_insensitive(true).build()?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Labelled, ordered group of patterns. Matches when any pattern matches.
#[derive(Debug, Clone)]
pub struct PatternSet {
    label: String,
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new(label: impl Into<String>, patterns: Vec<Pattern>) -> Self {
        Self {
            label: label.into(),
            patterns,
        }
    }

    fn compile(category: &str, label: &str, sources: &[String], literal: bool) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|source| {
                Pattern::compile(source, literal).map_err(|e| Error::InvalidPattern {
                    category: category.to_string(),
                    label: label.to_string(),
                    pattern: source.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(label, patterns))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// An empty set never matches.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// One entry of the ordered API-style rule list.
#[derive(Debug, Clone)]
pub struct StyleRule {
    style: ApiStyle,
    triggers: PatternSet,
}

impl StyleRule {
    pub fn new(style: ApiStyle, triggers: PatternSet) -> Self {
        Self { style, triggers }
    }

    pub fn style(&self) -> ApiStyle {
        self.style
    }

    pub fn triggers(&self) -> &PatternSet {
        &self.triggers
    }

    pub fn matches(&self, text: &str) -> bool {
        self.triggers.matches(text)
    }
}

/// Compiled, read-only pattern registry: API-style rules in priority order,
/// checklist topics and compliance keywords in declaration order.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    api_styles: Vec<StyleRule>,
    checklist: Vec<PatternSet>,
    compliance: Vec<PatternSet>,
}

impl PatternRegistry {
    /// Shared registry compiled from the builtin rule table.
    pub fn builtin() -> &'static PatternRegistry {
        &BUILTIN
    }

    /// Compile a registry from a declarative rule table.
    pub fn from_rules(rules: &RuleTable) -> Result<Self> {
        let api_styles = compile_style_rules(&rules.api_styles_or_default())?;
        let checklist = compile_labelled("checklist", &rules.checklist_or_default())?;
        let compliance = compile_labelled("compliance", &rules.compliance_or_default())?;

        tracing::debug!(
            api_styles = api_styles.len(),
            checklist = checklist.len(),
            compliance = compliance.len(),
            "Compiled pattern registry"
        );

        Ok(Self {
            api_styles,
            checklist,
            compliance,
        })
    }

    pub fn api_styles(&self) -> &[StyleRule] {
        &self.api_styles
    }

    pub fn checklist(&self) -> &[PatternSet] {
        &self.checklist
    }

    pub fn compliance(&self) -> &[PatternSet] {
        &self.compliance
    }

    pub fn checklist_labels(&self) -> impl Iterator<Item = &str> {
        self.checklist.iter().map(PatternSet::label)
    }

    pub fn compliance_labels(&self) -> impl Iterator<Item = &str> {
        self.compliance.iter().map(PatternSet::label)
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn compile_style_rules(rules: &[StyleRuleConfig]) -> Result<Vec<StyleRule>> {
    rules
        .iter()
        .map(|rule| {
            let label = rule.style.as_str();
            PatternSet::compile("api_styles", label, &rule.patterns, rule.literal)
                .map(|triggers| StyleRule::new(rule.style, triggers))
        })
        .collect()
}

fn compile_labelled(category: &str, rules: &[PatternRule]) -> Result<Vec<PatternSet>> {
    let mut seen = HashSet::new();
    rules
        .iter()
        .map(|rule| {
            let label = rule.label.trim();
            if label.is_empty() {
                return Err(Error::Configuration(format!(
                    "{category} rule with an empty label"
                )));
            }
            if !seen.insert(label.to_string()) {
                return Err(Error::Configuration(format!(
                    "Duplicate {category} label '{label}'"
                )));
            }
            PatternSet::compile(category, label, &rule.patterns, rule.literal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_layout() {
        let registry = PatternRegistry::builtin();
        let styles: Vec<_> = registry.api_styles().iter().map(StyleRule::style).collect();
        assert_eq!(styles, vec![ApiStyle::GraphQl, ApiStyle::Grpc]);
        assert_eq!(
            registry.checklist_labels().collect::<Vec<_>>(),
            vec!["Endpoints", "Authentication", "Data Model", "Performance"]
        );
        assert_eq!(
            registry.compliance_labels().collect::<Vec<_>>(),
            vec!["personal data", "pii", "gdpr", "hipaa", "consent"]
        );
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let pattern = Pattern::compile("real[- ]?time", false).unwrap();
        assert!(pattern.is_match("REAL-TIME updates"));
        assert!(pattern.is_match("Realtime"));
        assert!(pattern.is_match("real time"));
        assert!(!pattern.is_match("reality"));
    }

    #[test]
    fn test_literal_pattern_escapes_metacharacters() {
        let pattern = Pattern::compile("c++", true).unwrap();
        assert!(pattern.is_match("Written in C++"));
        assert!(!pattern.is_match("written in c"));
    }

    #[test]
    fn test_empty_set_never_matches() {
        let set = PatternSet::new("Nothing", vec![]);
        assert!(set.is_empty());
        assert!(!set.matches(""));
        assert!(!set.matches("anything at all"));
    }

    #[test]
    fn test_style_rule_matches_in_isolation() {
        let registry = PatternRegistry::builtin();
        let grpc = &registry.api_styles()[1];
        assert!(grpc.matches("bidirectional gRPC streams"));
        assert!(!grpc.matches("GraphQL only"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let rules = RuleTable {
            checklist: Some(vec![PatternRule::new("Broken", &["(unclosed"])]),
            ..RuleTable::default()
        };
        let err = PatternRegistry::from_rules(&rules).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPattern { ref label, .. } if label == "Broken"
        ));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let rules = RuleTable {
            compliance: Some(vec![
                PatternRule::new("gdpr", &["gdpr"]),
                PatternRule::new("gdpr", &["general data protection"]),
            ]),
            ..RuleTable::default()
        };
        assert!(matches!(
            PatternRegistry::from_rules(&rules),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_label_rejected() {
        let rules = RuleTable {
            checklist: Some(vec![PatternRule::new("  ", &["x"])]),
            ..RuleTable::default()
        };
        assert!(PatternRegistry::from_rules(&rules).is_err());
    }
}
