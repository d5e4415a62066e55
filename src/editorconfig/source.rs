//! Locating the `.editorconfig` text for a flow

use std::path::{Path, PathBuf};

use crate::context::{basename, MergedConfigs};
use crate::error::HookError;

/// Reserved name of the rule source, both as a merged config and on disk.
pub const EDITORCONFIG_FILENAME: &str = ".editorconfig";

/// Where the rule text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// A merged config entry, identified by its key.
    Merged { key: String, text: String },
    /// `.editorconfig` in the target directory.
    Disk { path: PathBuf, text: String },
}

impl RuleSource {
    pub fn text(&self) -> &str {
        match self {
            RuleSource::Merged { text, .. } | RuleSource::Disk { text, .. } => text,
        }
    }
}

/// Find the merged entry holding `.editorconfig` rules.
///
/// A top-level `.editorconfig` key wins over nested ones such as `pkg/.editorconfig`.
/// Entries with empty text don't count.
pub fn find_merged_editorconfig(configs: &MergedConfigs) -> Option<(&str, &str)> {
    if let Some(text) = configs.get(EDITORCONFIG_FILENAME) {
        if !text.is_empty() {
            return Some((EDITORCONFIG_FILENAME, text.as_str()));
        }
    }

    configs
        .iter()
        .find(|(key, text)| basename(key) == EDITORCONFIG_FILENAME && !text.is_empty())
        .map(|(key, text)| (key.as_str(), text.as_str()))
}

/// Resolve the rule text, preferring merged configs over the target directory.
pub async fn resolve_source(
    configs: &MergedConfigs,
    target_path: &Path,
) -> Result<RuleSource, HookError> {
    if let Some((key, text)) = find_merged_editorconfig(configs) {
        tracing::debug!(key, "using merged .editorconfig");
        return Ok(RuleSource::Merged {
            key: key.to_string(),
            text: text.to_string(),
        });
    }

    let path = target_path.join(EDITORCONFIG_FILENAME);
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => {
            tracing::debug!(path = %path.display(), "using .editorconfig from target directory");
            Ok(RuleSource::Disk { path, text })
        }
        Err(source) => Err(HookError::EditorconfigSourceMissing { path, source }),
    }
}
