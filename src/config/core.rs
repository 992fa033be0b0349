use serde::{Deserialize, Serialize};

use crate::builder::SpecBuilder;
use crate::classifier::Classifier;
use crate::core::Result;
use crate::patterns::{PatternRegistry, RuleTable};

/// Root configuration structure for rfpmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RfpmapConfig {
    /// Classification rule table
    #[serde(default)]
    pub rules: Option<RuleTable>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Draft specification generation
    #[serde(default)]
    pub spec: Option<SpecConfig>,
}

impl RfpmapConfig {
    /// Configuration written by `rfpmap init`: the builtin rules spelled out.
    pub fn with_builtin_rules() -> Self {
        Self {
            rules: Some(RuleTable::builtin()),
            output: Some(OutputConfig {
                default_format: Some("terminal".to_string()),
                use_color: None,
            }),
            spec: Some(SpecConfig::default()),
        }
    }

    pub fn registry(&self) -> Result<PatternRegistry> {
        match &self.rules {
            Some(rules) => PatternRegistry::from_rules(rules),
            None => Ok(PatternRegistry::default()),
        }
    }

    pub fn classifier(&self) -> Result<Classifier> {
        self.registry().map(Classifier::new)
    }

    pub fn spec_builder(&self) -> SpecBuilder {
        SpecBuilder::new().with_findings(self.annotate_findings())
    }

    pub fn annotate_findings(&self) -> bool {
        self.spec
            .as_ref()
            .map(|s| s.annotate_findings)
            .unwrap_or(false)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.default_format.as_deref())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// "terminal" or "json"
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SpecConfig {
    /// Add compliance and open-question blocks to generated drafts
    #[serde(default)]
    pub annotate_findings: bool,
}
