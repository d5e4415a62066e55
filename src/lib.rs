pub mod colors;
pub mod config;
pub mod context;
pub mod editorconfig;
pub mod error;
pub mod format;
pub mod glob;
pub mod hook;
pub mod matcher;
mod output;
pub mod progress;
pub mod semaphore;
pub mod walker;

pub use colors::{should_use_colors, Colors, Stream};
pub use config::{
    find_config_file, generate_init_file, load_config, merge_hook_config, CliHookOptions,
    ConfigError, HookSection, HookToml, HOOK_TOML_TEMPLATE,
};
pub use context::{FlowContext, MergedConfigs};
pub use editorconfig::{
    parse_editorconfig, resolve_rule_sets, resolve_source, EditorconfigFile, IndentRules,
    IndentStyle, ParseError, RuleSet, RuleSource, EDITORCONFIG_FILENAME,
};
pub use error::HookError;
pub use format::{apply_format, detect_indent, FormatRules, Indent};
pub use hook::{editorconfig_hook, EditorconfigHook, HookConfig, HookOutcome};
pub use matcher::format_configs;
pub use output::{print_diff, Config, OutputContext, OutputMode, RunResult};
pub use progress::ProgressReporter;
pub use semaphore::{ConsoleSemaphore, RecordingSemaphore, Semaphore};
pub use walker::walk_paths;

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

const BINARY_CHECK_SIZE: usize = 8192;

/// Check if content is binary by looking for null bytes in first 8192 bytes
pub fn is_binary(content: &[u8]) -> bool {
    let check_len = content.len().min(BINARY_CHECK_SIZE);
    content[..check_len].contains(&0)
}

/// Main entry point: collect config files under `paths`, run the hook over
/// them as one flow, then write back or report what changed.
pub async fn run(paths: &[PathBuf], config: &Config, ctx: &OutputContext) -> io::Result<RunResult> {
    let mut result = RunResult::default();

    let files = walk_paths(paths).collect::<io::Result<Vec<_>>>()?;
    let progress = ProgressReporter::new(files.len() as u64, ctx.show_progress);

    let target = tokio::fs::canonicalize(&config.target_path)
        .await
        .unwrap_or_else(|_| config.target_path.clone());
    let mut merged = MergedConfigs::new();
    let mut locations = BTreeMap::new();

    for path in files {
        // Update progress bar message with current file name
        if let Some(name) = path.file_name() {
            progress.set_message(&name.to_string_lossy());
        }

        match read_config(&path, ctx).await {
            Ok(Some(content)) => {
                let key = config_key(&path, &target).await;
                merged.insert(key.clone(), content);
                locations.insert(key, path);
            }
            Ok(None) => {}
            Err(e) => {
                if ctx.mode != OutputMode::Quiet {
                    eprintln!("Error reading {}: {e}", path.display());
                }
            }
        }

        progress.inc();
    }

    progress.finish();
    tracing::debug!(configs = merged.len(), target = %target.display(), "collected configs");

    let semaphore = ConsoleSemaphore::new(ctx.colors, ctx.mode == OutputMode::Quiet);
    let mut context = FlowContext::new(&config.target_path, merged.clone());
    let outcome = EditorconfigHook::new(config.hook)
        .apply(&mut context, &semaphore)
        .await;

    if let HookOutcome::Formatted { changed } = outcome {
        for key in changed {
            let (Some(path), Some(original), Some(formatted)) = (
                locations.get(&key),
                merged.get(&key),
                context.merged_configs.get(&key),
            ) else {
                continue;
            };

            if config.check_only {
                result.files_with_problems += 1;
                output::print_check_result(&key, original, formatted, ctx);
            } else {
                tokio::fs::write(path, formatted).await?;
                result.files_formatted += 1;
                output::print_fix_result(&key, original, formatted, ctx);
            }
        }
    }

    output::print_summary(&result, config, ctx);

    Ok(result)
}

/// Read a file as a config, or `None` if it is empty, binary or not UTF-8.
async fn read_config(path: &Path, ctx: &OutputContext) -> io::Result<Option<String>> {
    let bytes = tokio::fs::read(path).await?;

    let reason = if bytes.is_empty() {
        "empty"
    } else if is_binary(&bytes) {
        "binary"
    } else {
        match String::from_utf8(bytes) {
            Ok(content) => return Ok(Some(content)),
            Err(_) => "non-UTF-8",
        }
    };

    if ctx.verbose {
        output::print_skipped(path, reason, ctx);
    }
    Ok(None)
}

/// Config name for `path`: relative to the target directory when inside it.
async fn config_key(path: &Path, target: &Path) -> String {
    let absolute = tokio::fs::canonicalize(path)
        .await
        .unwrap_or_else(|_| path.to_path_buf());

    absolute
        .strip_prefix(target)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
