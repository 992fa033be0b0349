use crate::config::{RfpmapConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const HEADER: &str = "# rfpmap configuration
#
# Rule sections replace the builtin rules for their category; delete a
# section to fall back to the builtin rules. Patterns are case-insensitive
# regular expressions unless `literal = true` is set on the rule.
# API style rules are checked top to bottom and the first match wins.

";

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(&std::env::current_dir()?, force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = toml::to_string_pretty(&RfpmapConfig::with_builtin_rules())?;
    io::write_file(&config_path, &format!("{HEADER}{body}"))?;

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_path;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let path = init_config_in(temp.path(), false).unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config, RfpmapConfig::with_builtin_rules());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# rfpmap configuration"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        init_config_in(temp.path(), false).unwrap();
        assert!(init_config_in(temp.path(), false).is_err());
        assert!(init_config_in(temp.path(), true).is_ok());
    }
}
