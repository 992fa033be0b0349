pub mod errors;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

pub use errors::{Error, Result, ResultExt};

/// API style inferred from (or confirmed for) an RFP.
///
/// Serializes under its display name; deserializes from any casing of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ApiStyle {
    #[default]
    #[serde(rename = "REST")]
    Rest,
    #[serde(rename = "GraphQL")]
    GraphQl,
    #[serde(rename = "gRPC")]
    Grpc,
}

impl ApiStyle {
    /// All styles in presentation order.
    pub const ALL: [ApiStyle; 3] = [ApiStyle::Rest, ApiStyle::GraphQl, ApiStyle::Grpc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "REST",
            Self::GraphQl => "GraphQL",
            Self::Grpc => "gRPC",
        }
    }
}

impl std::fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ApiStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "Unknown API style '{s}' (expected one of REST, GraphQL, gRPC)"
                ))
            })
    }
}

impl TryFrom<String> for ApiStyle {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Findings for one run of the classifier over one input text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub detected_api_style: ApiStyle,
    /// Checklist labels with no matching pattern, in checklist order.
    pub missing_topics: Vec<String>,
    /// Compliance keywords found, in keyword declaration order.
    pub compliance_flags: Vec<String>,
}

impl ClassificationResult {
    /// True when every checklist topic was found in the text.
    pub fn is_complete(&self) -> bool {
        self.missing_topics.is_empty()
    }

    pub fn has_compliance_flags(&self) -> bool {
        !self.compliance_flags.is_empty()
    }

    pub fn is_missing(&self, topic: &str) -> bool {
        self.missing_topics.iter().any(|t| t == topic)
    }
}

/// Primitive field types used in the draft data model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Integer,
    String,
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

/// Compliance block attached to a draft when annotation is enabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceAnnotation {
    pub flags: Vec<String>,
    pub note: String,
}

/// Draft API specification handed to the exporter.
///
/// The four base fields mirror the exported JSON document. The optional
/// fields are only populated by an annotating [`crate::builder::SpecBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSpecification {
    pub api_type: ApiStyle,
    pub endpoints: Vec<String>,
    pub security: String,
    pub data_model: BTreeMap<String, PrimitiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceAnnotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub open_questions: Vec<String>,
}
