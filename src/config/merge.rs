//! Configuration merging logic
//!
//! Priority: CLI args > editorconfig-hook.toml > defaults

use crate::editorconfig::IndentStyle;
use crate::HookConfig;

use super::toml_schema::HookSection;

/// CLI options that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliHookOptions {
    pub indent_style: Option<IndentStyle>,
    pub indent_size: Option<usize>,
}

/// Merge configurations from CLI, TOML, and defaults.
///
/// Priority: CLI > TOML > defaults
pub fn merge_hook_config(cli: &CliHookOptions, toml: Option<&HookSection>) -> HookConfig {
    let defaults = HookConfig::default();

    HookConfig {
        default_indent_style: cli
            .indent_style
            .or_else(|| toml.and_then(|t| t.default_indent_style))
            .unwrap_or(defaults.default_indent_style),
        default_indent_size: cli
            .indent_size
            .or_else(|| toml.and_then(|t| t.default_indent_size))
            .unwrap_or(defaults.default_indent_size),
    }
}
