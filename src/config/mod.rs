//! Configuration for rfpmap.
//!
//! Settings live in `.rfpmap.toml`, discovered from the working directory
//! upward, with a user-level fallback. Everything is optional; an absent
//! file means the builtin rule table and terminal output.

mod core;
mod loader;

pub use self::core::{OutputConfig, RfpmapConfig, SpecConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ApiStyle;
    use crate::patterns::{PatternRule, RuleTable};

    #[test]
    fn test_default_config_uses_builtin_rules() {
        let config = RfpmapConfig::default();
        let classifier = config.classifier().unwrap();
        assert_eq!(classifier.registry().checklist().len(), 4);
        assert!(!config.spec_builder().annotates_findings());
        assert_eq!(config.default_format(), None);
    }

    #[test]
    fn test_rules_section_overrides_category() {
        let config = RfpmapConfig {
            rules: Some(RuleTable {
                checklist: Some(vec![PatternRule::new("Pagination", &["paginat"])]),
                ..RuleTable::default()
            }),
            ..RfpmapConfig::default()
        };
        let result = config.classifier().unwrap().classify("GraphQL pagination");
        assert!(result.missing_topics.is_empty());
        assert_eq!(result.detected_api_style, ApiStyle::GraphQl);
    }

    #[test]
    fn test_init_config_round_trips_through_toml() {
        let config = RfpmapConfig::with_builtin_rules();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = parse_and_validate_config(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
