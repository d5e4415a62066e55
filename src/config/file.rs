//! Config file discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::toml_schema::HookToml;

pub const CONFIG_FILENAME: &str = "editorconfig-hook.toml";

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// TOML parsing error
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Well-formed TOML with an unusable value
    #[error("invalid config file: {0}")]
    Invalid(String),
}

/// Search upward from `start_dir` for `filename`, giving up at the git root
/// (a directory containing `.git`) or the filesystem root.
fn find_file_upward(start_dir: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if current.join(".git").exists() || !current.pop() {
            return None;
        }
    }
}

/// Find editorconfig-hook.toml by searching upward from the given directory.
///
/// Stops at the first config found, or at the git repository root
/// (directory containing `.git`), whichever comes first.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, CONFIG_FILENAME)
}

/// Load and parse editorconfig-hook.toml from the given path.
pub fn load_config(path: &Path) -> Result<HookToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: HookToml = toml::from_str(&content)?;

    if config.hook.default_indent_size == Some(0) {
        return Err(ConfigError::Invalid(
            "default_indent_size must be at least 1".into(),
        ));
    }

    Ok(config)
}
