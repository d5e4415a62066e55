//! Configuration file support for editorconfig-hook.
//!
//! This module provides:
//! - Loading configuration from `editorconfig-hook.toml`
//! - Config file discovery (search upward from current directory)
//! - Merging CLI args, config file, and defaults
//! - Template generation with `--init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{find_config_file, load_config, ConfigError, CONFIG_FILENAME};
pub use init::{generate_init_file, generate_init_file_in, HOOK_TOML_TEMPLATE};
pub use merge::{merge_hook_config, CliHookOptions};
pub use toml_schema::{HookSection, HookToml};
