//! Flow context passed between pipeline hooks

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config name (may contain path segments) mapped to its content.
pub type MergedConfigs = BTreeMap<String, String>;

/// Shared state of one flow run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowContext {
    /// Directory the merged configs are destined for
    pub target_path: PathBuf,
    /// Configs merged from every source so far
    pub merged_configs: MergedConfigs,
}

impl FlowContext {
    pub fn new(target_path: impl Into<PathBuf>, merged_configs: MergedConfigs) -> Self {
        Self {
            target_path: target_path.into(),
            merged_configs,
        }
    }
}

/// Final path segment of a config name.
pub fn basename(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}
