//! CLI command implementations for rfpmap.
//!
//! Available commands:
//! - **analyze**: Classify an RFP and emit findings plus a draft API spec
//! - **init**: Write a `.rfpmap.toml` containing the builtin rule table
//! - **patterns**: Print the effective rule table

pub mod analyze;
pub mod init;
pub mod patterns;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use patterns::{list_patterns, render_registry};
