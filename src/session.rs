//! Per-user analysis session.
//!
//! A [`Session`] owns one RFP text, its classification and the confirmed
//! API style. It is passed explicitly between classification, drafting
//! and export; there is no process-wide draft.

use crate::builder::SpecBuilder;
use crate::classifier::Classifier;
use crate::core::{ApiStyle, ClassificationResult, DraftSpecification};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Session {
    classifier: Arc<Classifier>,
    text: String,
    classification: ClassificationResult,
    selected_style: ApiStyle,
}

impl Session {
    /// Classify `text` and pre-select the detected style.
    pub fn new(classifier: Arc<Classifier>, text: impl Into<String>) -> Self {
        let text = text.into();
        let classification = classifier.classify(&text);
        let selected_style = classification.detected_api_style;
        Self {
            classifier,
            text,
            classification,
            selected_style,
        }
    }

    /// Replace the text. Findings are recomputed and any style override
    /// is dropped in favor of the newly detected style.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.classification = self.classifier.classify(&self.text);
        self.selected_style = self.classification.detected_api_style;
    }

    pub fn select_style(&mut self, style: ApiStyle) {
        if style != self.classification.detected_api_style {
            tracing::debug!(
                detected = %self.classification.detected_api_style,
                selected = %style,
                "API style overridden"
            );
        }
        self.selected_style = style;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classification(&self) -> &ClassificationResult {
        &self.classification
    }

    pub fn selected_style(&self) -> ApiStyle {
        self.selected_style
    }

    pub fn is_overridden(&self) -> bool {
        self.selected_style != self.classification.detected_api_style
    }

    /// Build a fresh draft from the current selection and findings.
    pub fn draft(&self, builder: &SpecBuilder) -> DraftSpecification {
        builder.build(self.selected_style, &self.classification)
    }
}
