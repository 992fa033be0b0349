//! Declarative rule table for the pattern registry.
//!
//! The table is plain data so it can be read from `.rfpmap.toml` and
//! extended without touching classification code:
//!
//! ```toml
//! [[rules.api_styles]]
//! style = "GraphQL"
//! patterns = ["graphql"]
//!
//! [[rules.checklist]]
//! label = "Endpoints"
//! patterns = ["endpoint"]
//!
//! [[rules.compliance]]
//! label = "pci"
//! patterns = ["pci[- ]?dss", "cardholder"]
//! ```
//!
//! A section left out of the file falls back to the builtin section. A
//! section written as an empty list disables that category.

use crate::core::ApiStyle;
use serde::{Deserialize, Serialize};

/// One labelled group of patterns (a checklist topic or compliance keyword).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub label: String,

    /// Case-insensitive regular expressions, or plain substrings when
    /// `literal` is set
    #[serde(default)]
    pub patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub literal: bool,
}

impl PatternRule {
    pub fn new(label: impl Into<String>, patterns: &[&str]) -> Self {
        Self {
            label: label.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            literal: false,
        }
    }
}

/// Trigger patterns for one API style. Order in the table is priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRuleConfig {
    pub style: ApiStyle,

    #[serde(default)]
    pub patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub literal: bool,
}

impl StyleRuleConfig {
    pub fn new(style: ApiStyle, patterns: &[&str]) -> Self {
        Self {
            style,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            literal: false,
        }
    }
}

/// Rule table as written in configuration. `None` sections use the builtin rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_styles: Option<Vec<StyleRuleConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<PatternRule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<Vec<PatternRule>>,
}

impl RuleTable {
    /// Fully populated table with the builtin rules.
    pub fn builtin() -> Self {
        Self {
            api_styles: Some(default_api_styles()),
            checklist: Some(default_checklist()),
            compliance: Some(default_compliance()),
        }
    }

    pub fn api_styles_or_default(&self) -> Vec<StyleRuleConfig> {
        self.api_styles.clone().unwrap_or_else(default_api_styles)
    }

    pub fn checklist_or_default(&self) -> Vec<PatternRule> {
        self.checklist.clone().unwrap_or_else(default_checklist)
    }

    pub fn compliance_or_default(&self) -> Vec<PatternRule> {
        self.compliance.clone().unwrap_or_else(default_compliance)
    }
}

/// GraphQL is checked before gRPC, so a document naming both resolves to GraphQL.
pub fn default_api_styles() -> Vec<StyleRuleConfig> {
    vec![
        StyleRuleConfig::new(ApiStyle::GraphQl, &["graphql"]),
        StyleRuleConfig::new(ApiStyle::Grpc, &["real[- ]?time", "grpc"]),
    ]
}

pub fn default_checklist() -> Vec<PatternRule> {
    vec![
        PatternRule::new("Endpoints", &["endpoint"]),
        PatternRule::new("Authentication", &["auth", "login", "oauth", "token"]),
        PatternRule::new("Data Model", &["schema", "model", "database"]),
        PatternRule::new("Performance", &["scalability", "latency", "throughput"]),
    ]
}

pub fn default_compliance() -> Vec<PatternRule> {
    ["personal data", "pii", "gdpr", "hipaa", "consent"]
        .into_iter()
        .map(|keyword| PatternRule::new(keyword, &[keyword]))
        .collect()
}

fn is_false(value: &bool) -> bool {
    !*value
}
