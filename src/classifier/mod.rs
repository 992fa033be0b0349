//! RFP text classification.
//!
//! Scans plain text against a [`PatternRegistry`] and reports the inferred
//! API style, the checklist topics that are missing, and the compliance
//! keywords that appear. Classification is a pure scan: any input,
//! including empty or binary-looking text, yields a result.

use crate::core::{ApiStyle, ClassificationResult};
use crate::patterns::{PatternRegistry, PatternSet};

/// Classify `text` with the builtin rule table.
pub fn classify(text: &str) -> ClassificationResult {
    classify_with(PatternRegistry::builtin(), text)
}

/// Classify `text` against an explicit registry.
pub fn classify_with(registry: &PatternRegistry, text: &str) -> ClassificationResult {
    let result = ClassificationResult {
        detected_api_style: detect_api_style(registry, text),
        missing_topics: missing_topics(registry.checklist(), text),
        compliance_flags: compliance_flags(registry.compliance(), text),
    };

    tracing::debug!(
        text_len = text.len(),
        style = %result.detected_api_style,
        missing = result.missing_topics.len(),
        flags = result.compliance_flags.len(),
        "Classified RFP text"
    );

    result
}

/// First matching style rule wins; REST when none match.
pub fn detect_api_style(registry: &PatternRegistry, text: &str) -> ApiStyle {
    registry
        .api_styles()
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.style())
        .unwrap_or_default()
}

/// Labels of topics with no matching pattern, in checklist order.
pub fn missing_topics(checklist: &[PatternSet], text: &str) -> Vec<String> {
    checklist
        .iter()
        .filter(|topic| !topic.matches(text))
        .map(|topic| topic.label().to_string())
        .collect()
}

/// Labels of compliance keywords present in the text, in declaration order.
pub fn compliance_flags(compliance: &[PatternSet], text: &str) -> Vec<String> {
    compliance
        .iter()
        .filter(|keyword| keyword.matches(text))
        .map(|keyword| keyword.label().to_string())
        .collect()
}

/// Classifier bound to a registry, shareable across sessions.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    registry: PatternRegistry,
}

impl Classifier {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        classify_with(&self.registry, text)
    }
}
