//! TOML schema definitions for editorconfig-hook.toml

use serde::{Deserialize, Serialize};

use crate::editorconfig::IndentStyle;

/// Root structure for editorconfig-hook.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct HookToml {
    /// Hook settings
    #[serde(default)]
    pub hook: HookSection,
}

/// `[hook]` section in editorconfig-hook.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookSection {
    /// Indent style for sections without `indent_style` (default: space)
    pub default_indent_style: Option<IndentStyle>,

    /// Indent size for sections without `indent_size` (default: 2)
    pub default_indent_size: Option<usize>,
}
