//! The editorconfig hook: re-indents merged configs by `.editorconfig` rules.
//!
//! Meant to run after configs from every source have been merged:
//!
//! ```no_run
//! use editorconfig_hook::{editorconfig_hook, FlowContext, RecordingSemaphore};
//!
//! # async fn flow(context: FlowContext) -> FlowContext {
//! let semaphore = RecordingSemaphore::new();
//! editorconfig_hook(context, &semaphore).await
//! # }
//! ```

use crate::context::FlowContext;
use crate::editorconfig::{
    parse_editorconfig, resolve_rule_sets, resolve_source, IndentRules, IndentStyle, RuleSet,
    DEFAULT_INDENT_SIZE, DEFAULT_INDENT_STYLE,
};
use crate::error::HookError;
use crate::matcher::format_configs;
use crate::semaphore::Semaphore;

/// Indentation used when a matching section leaves it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookConfig {
    pub default_indent_style: IndentStyle,
    pub default_indent_size: usize,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            default_indent_style: DEFAULT_INDENT_STYLE,
            default_indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

impl HookConfig {
    pub fn default_rules(&self) -> IndentRules {
        IndentRules {
            style: self.default_indent_style,
            size: self.default_indent_size,
        }
    }
}

/// How a hook run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// No merged configs; nothing was done.
    Empty,
    /// No `.editorconfig` in the merged configs or the target directory.
    SourceMissing,
    /// `.editorconfig` was found but could not be used.
    ParseFailed,
    /// Rules were applied. Lists the configs whose content changed.
    Formatted { changed: Vec<String> },
}

#[derive(Debug, Clone, Default)]
pub struct EditorconfigHook {
    config: HookConfig,
}

impl EditorconfigHook {
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }

    /// Run the hook and hand the context back.
    ///
    /// Never fails: problems are reported through `semaphore` and leave the
    /// context exactly as it came in.
    pub async fn run(&self, mut context: FlowContext, semaphore: &dyn Semaphore) -> FlowContext {
        self.apply(&mut context, semaphore).await;
        context
    }

    /// Format `context` in place and report how the run ended.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(target = %context.target_path.display(), configs = context.merged_configs.len())
    )]
    pub async fn apply(&self, context: &mut FlowContext, semaphore: &dyn Semaphore) -> HookOutcome {
        semaphore.start("editorconfig: formatting");

        // Everything that can fail happens before the first config is touched
        let rule_sets = match self.rule_sets(context).await {
            Ok(rule_sets) => rule_sets,
            Err(err) => return report_failure(err, semaphore),
        };

        let changed = format_configs(&mut context.merged_configs, &rule_sets);
        tracing::debug!(changed = changed.len(), "formatted configs");

        semaphore.success("editorconfig: configs have been formatted");
        HookOutcome::Formatted { changed }
    }

    async fn rule_sets(&self, context: &FlowContext) -> Result<Vec<RuleSet>, HookError> {
        if context.merged_configs.is_empty() {
            return Err(HookError::NoConfigsToFormat);
        }

        let source = resolve_source(&context.merged_configs, &context.target_path).await?;
        let file = parse_editorconfig(source.text())?;
        tracing::debug!(sections = file.sections.len(), root = ?file.root, "parsed .editorconfig");

        resolve_rule_sets(&file, self.config.default_rules())
    }
}

fn report_failure(err: HookError, semaphore: &dyn Semaphore) -> HookOutcome {
    if !err.is_warning() {
        semaphore.error(&format!(
            "editorconfig: can't parse .editorconfig config: {err}"
        ));
        return HookOutcome::ParseFailed;
    }

    match err {
        HookError::NoConfigsToFormat => {
            semaphore.warn("editorconfig: nothing to format");
            HookOutcome::Empty
        }
        err => {
            tracing::debug!(error = %err, "no .editorconfig");
            semaphore.warn("editorconfig: can't find .editorconfig config");
            HookOutcome::SourceMissing
        }
    }
}

/// Run the hook with default settings.
pub async fn editorconfig_hook(context: FlowContext, semaphore: &dyn Semaphore) -> FlowContext {
    EditorconfigHook::default().run(context, semaphore).await
}
