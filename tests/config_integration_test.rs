//! Integration tests for loading custom rule tables from `.rfpmap.toml`.

use indoc::indoc;
use rfpmap::config::{load_config_from, load_config_from_path, CONFIG_FILE_NAME};
use rfpmap::{ApiStyle, Error};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_custom_compliance_keywords_replace_builtin() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        indoc! {r#"
            [[rules.compliance]]
            label = "pci"
            patterns = ["pci[- ]?dss", "cardholder"]

            [[rules.compliance]]
            label = "sox"
            patterns = ["sarbanes", "sox"]
        "#},
    );

    let config = load_config_from_path(&path).unwrap();
    let result = config
        .classifier()
        .unwrap()
        .classify("Cardholder data under PCI-DSS; GDPR also applies");

    assert_eq!(result.compliance_flags, vec!["pci"]);
    // Checklist and styles were not configured, so builtin rules remain.
    assert_eq!(result.missing_topics.len(), 4);
}

#[test]
fn test_literal_rules_and_style_priority() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        indoc! {r#"
            [[rules.api_styles]]
            style = "gRPC"
            patterns = [".proto"]
            literal = true

            [[rules.api_styles]]
            style = "GraphQL"
            patterns = ["graphql"]
        "#},
    );

    let classifier = load_config_from_path(&path).unwrap().classifier().unwrap();

    assert_eq!(
        classifier.classify("ship .proto files and a GraphQL gateway").detected_api_style,
        ApiStyle::Grpc
    );
    // Literal pattern: "." is not a wildcard.
    assert_eq!(
        classifier.classify("xproto").detected_api_style,
        ApiStyle::Rest
    );
}

#[test]
fn test_spec_section_enables_annotation() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        indoc! {r#"
            [spec]
            annotate_findings = true

            [output]
            default_format = "json"
        "#},
    );

    let config = load_config_from(temp.path().to_path_buf());
    assert!(config.spec_builder().annotates_findings());
    assert_eq!(config.default_format(), Some("json"));
}

#[test]
fn test_invalid_regex_in_explicit_config_is_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        indoc! {r#"
            [[rules.checklist]]
            label = "Endpoints"
            patterns = ["end(point"]
        "#},
    );

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::WithContext { .. }));
    assert!(err.to_string().contains("end(point"));
}
