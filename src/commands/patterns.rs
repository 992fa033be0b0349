use super::analyze::resolve_settings;
use crate::patterns::{Pattern, PatternRegistry, PatternSet};
use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

pub fn list_patterns(config: Option<&Path>) -> Result<()> {
    let settings = resolve_settings(config)?;
    let registry = settings
        .registry()
        .context("Failed to compile classification rules")?;
    print!("{}", render_registry(&registry));
    Ok(())
}

/// Human-readable listing of every category in evaluation order.
pub fn render_registry(registry: &PatternRegistry) -> String {
    let mut out = String::new();

    out.push_str("API styles (first match wins, default REST):\n");
    if registry.api_styles().is_empty() {
        out.push_str("  (none)\n");
    }
    for (rank, rule) in registry.api_styles().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}: {}",
            rank + 1,
            rule.style(),
            join_patterns(rule.triggers())
        );
    }

    render_sets(&mut out, "Checklist topics", registry.checklist());
    render_sets(&mut out, "Compliance keywords", registry.compliance());
    out
}

fn render_sets(out: &mut String, title: &str, sets: &[PatternSet]) {
    let _ = writeln!(out, "\n{title}:");
    if sets.is_empty() {
        out.push_str("  (none)\n");
    }
    for set in sets {
        let _ = writeln!(out, "  {}: {}", set.label(), join_patterns(set));
    }
}

fn join_patterns(set: &PatternSet) -> String {
    if set.is_empty() {
        return "(never matches)".to_string();
    }
    set.patterns()
        .iter()
        .map(Pattern::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{PatternRule, RuleTable};

    #[test]
    fn test_render_builtin_registry() {
        let text = render_registry(PatternRegistry::builtin());
        assert!(text.contains("  1. GraphQL: graphql\n"));
        assert!(text.contains("  2. gRPC: real[- ]?time, grpc\n"));
        assert!(text.contains("  Authentication: auth, login, oauth, token\n"));
        assert!(text.contains("  personal data: personal data\n"));
    }

    #[test]
    fn test_render_empty_sections() {
        let rules = RuleTable {
            api_styles: Some(vec![]),
            compliance: Some(vec![PatternRule::new("export control", &[])]),
            ..RuleTable::default()
        };
        let text = render_registry(&PatternRegistry::from_rules(&rules).unwrap());
        assert!(text.contains("API styles (first match wins, default REST):\n  (none)\n"));
        assert!(text.contains("  export control: (never matches)\n"));
    }
}
