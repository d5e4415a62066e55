//! Applying resolved rule sets to merged configs

use crate::context::{basename, MergedConfigs};
use crate::editorconfig::RuleSet;
use crate::format::{apply_format, FormatRules};

/// Format every config matched by each rule set, in declaration order.
///
/// Each match re-formats the config's current content, so when several
/// sections match the same config the last one decides its indentation.
/// Keys are never added or removed.
///
/// Returns the names of configs whose content changed.
pub fn format_configs(configs: &mut MergedConfigs, rule_sets: &[RuleSet]) -> Vec<String> {
    let original = configs.clone();

    for rule_set in rule_sets {
        for (name, content) in configs.iter_mut() {
            let filename = basename(name);
            if !rule_set.matches(filename) {
                continue;
            }

            tracing::debug!(config = %name, pattern = %rule_set.pattern, "matched");

            let rules = FormatRules {
                indent_type: rule_set.indent.style,
                indent_size: rule_set.indent.size,
                eof: true,
            };
            *content = apply_format(filename, content, &rules);
        }
    }

    configs
        .iter()
        .filter(|(name, content)| original.get(*name) != Some(*content))
        .map(|(name, _)| name.clone())
        .collect()
}
