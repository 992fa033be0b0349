use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RfpmapConfig;
use crate::core::{Error, Result, ResultExt};
use crate::patterns::PatternRegistry;

pub const CONFIG_FILE_NAME: &str = ".rfpmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string and check that its rule table compiles
pub fn parse_and_validate_config(contents: &str) -> Result<RfpmapConfig> {
    let config = toml::from_str::<RfpmapConfig>(contents)?;

    if let Some(ref rules) = config.rules {
        PatternRegistry::from_rules(rules)?;
    }

    if let Some(format) = config.default_format() {
        if !matches!(format, "terminal" | "json") {
            return Err(Error::Configuration(format!(
                "Unknown output.default_format '{format}' (expected terminal or json)"
            )));
        }
    }

    Ok(config)
}

/// Try loading config from a discovered path; failures fall back to defaults
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RfpmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// User-level config location, e.g. `~/.config/rfpmap/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rfpmap").join("config.toml"))
}

/// Discover config starting at `start`, then the user config, then defaults
pub fn load_config_from(start: PathBuf) -> RfpmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RfpmapConfig::default()
        })
}

pub fn load_config() -> RfpmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RfpmapConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, any failure
/// is an error.
pub fn load_config_from_path(path: &Path) -> Result<RfpmapConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::io("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents).context(format!("Invalid config {}", path.display()))
}
