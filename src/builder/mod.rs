//! Draft specification builder.
//!
//! Turns a confirmed API style plus classification findings into a
//! [`DraftSpecification`]. The generated body is a fixed placeholder; with
//! [`SpecBuilder::with_findings`] the findings are carried into the draft
//! as a compliance block and a list of open questions.

use crate::core::{
    ApiStyle, ClassificationResult, ComplianceAnnotation, DraftSpecification, PrimitiveType,
};
use std::collections::BTreeMap;

pub const PLACEHOLDER_ENDPOINT: &str = "/sample";
pub const PLACEHOLDER_SECURITY: &str = "OAuth2 (placeholder)";

const COMPLIANCE_NOTE: &str =
    "RFP mentions regulated data; review data handling before finalizing the design";

/// Build a draft with default settings.
pub fn build(api_style: ApiStyle, classification: &ClassificationResult) -> DraftSpecification {
    SpecBuilder::default().build(api_style, classification)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecBuilder {
    annotate_findings: bool,
}

impl SpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carry missing topics and compliance flags into generated drafts.
    pub fn with_findings(mut self, annotate: bool) -> Self {
        self.annotate_findings = annotate;
        self
    }

    pub fn annotates_findings(&self) -> bool {
        self.annotate_findings
    }

    /// `api_style` is the confirmed selection and may differ from
    /// `classification.detected_api_style`.
    pub fn build(
        &self,
        api_style: ApiStyle,
        classification: &ClassificationResult,
    ) -> DraftSpecification {
        let mut draft = DraftSpecification {
            api_type: api_style,
            endpoints: vec![PLACEHOLDER_ENDPOINT.to_string()],
            security: PLACEHOLDER_SECURITY.to_string(),
            data_model: placeholder_data_model(),
            compliance: None,
            open_questions: Vec::new(),
        };

        if self.annotate_findings {
            draft.compliance = compliance_annotation(classification);
            draft.open_questions = open_questions(classification);
        }

        draft
    }
}

fn placeholder_data_model() -> BTreeMap<String, PrimitiveType> {
    BTreeMap::from([
        ("id".to_string(), PrimitiveType::Integer),
        ("name".to_string(), PrimitiveType::String),
    ])
}

fn compliance_annotation(classification: &ClassificationResult) -> Option<ComplianceAnnotation> {
    classification
        .has_compliance_flags()
        .then(|| ComplianceAnnotation {
            flags: classification.compliance_flags.clone(),
            note: COMPLIANCE_NOTE.to_string(),
        })
}

fn open_questions(classification: &ClassificationResult) -> Vec<String> {
    classification
        .missing_topics
        .iter()
        .map(|topic| format!("{topic}: not specified in the RFP"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn findings() -> ClassificationResult {
        ClassificationResult {
            detected_api_style: ApiStyle::GraphQl,
            missing_topics: vec!["Performance".to_string()],
            compliance_flags: vec!["gdpr".to_string()],
        }
    }

    #[test]
    fn test_build_uses_confirmed_style() {
        let draft = build(ApiStyle::Grpc, &findings());
        assert_eq!(draft.api_type, ApiStyle::Grpc);
    }

    #[test]
    fn test_build_placeholder_body() {
        let draft = build(ApiStyle::Rest, &ClassificationResult::default());
        assert_eq!(draft.endpoints, vec!["/sample"]);
        assert_eq!(draft.security, "OAuth2 (placeholder)");
        assert_eq!(draft.data_model.get("id"), Some(&PrimitiveType::Integer));
        assert_eq!(draft.data_model.get("name"), Some(&PrimitiveType::String));
        assert_eq!(draft.data_model.len(), 2);
    }

    #[test]
    fn test_default_build_ignores_findings() {
        let draft = build(ApiStyle::Rest, &findings());
        assert_eq!(draft.compliance, None);
        assert!(draft.open_questions.is_empty());
        assert_eq!(draft, build(ApiStyle::Rest, &ClassificationResult::default()));
    }

    #[test]
    fn test_annotating_builder_adds_findings() {
        let draft = SpecBuilder::new().with_findings(true).build(ApiStyle::Rest, &findings());
        let compliance = draft.compliance.unwrap();
        assert_eq!(compliance.flags, vec!["gdpr"]);
        assert_eq!(
            draft.open_questions,
            vec!["Performance: not specified in the RFP"]
        );
    }

    #[test]
    fn test_annotating_builder_skips_empty_findings() {
        let clean = ClassificationResult::default();
        let draft = SpecBuilder::new().with_findings(true).build(ApiStyle::Rest, &clean);
        assert_eq!(draft.compliance, None);
        assert!(draft.open_questions.is_empty());
    }
}
