// Export modules for library usage
pub mod builder;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod patterns;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ApiStyle, ClassificationResult, ComplianceAnnotation, DraftSpecification, Error,
    PrimitiveType,
};

pub use crate::builder::{build, SpecBuilder};
pub use crate::classifier::{classify, classify_with, Classifier};
pub use crate::patterns::{
    Pattern, PatternRegistry, PatternRule, PatternSet, RuleTable, StyleRule,
};
pub use crate::session::Session;

pub use crate::io::output::{export_json, AnalysisReport};
