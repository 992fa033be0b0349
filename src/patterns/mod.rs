//! Pattern registry for RFP classification.
//!
//! Holds the trigger patterns for each detectable category: API-style
//! signals, checklist topics and compliance keywords. The registry is
//! compiled once from a [`RuleTable`] and is read-only afterwards.

pub mod registry;
pub mod rules;

pub use registry::{Pattern, PatternRegistry, PatternSet, StyleRule};
pub use rules::{PatternRule, RuleTable, StyleRuleConfig};
