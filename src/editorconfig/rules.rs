//! Indentation rules resolved from parsed editorconfig sections

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parser::{EditorconfigFile, Section};
use crate::error::HookError;
use crate::glob::PatternMatcher;

pub const DEFAULT_INDENT_STYLE: IndentStyle = IndentStyle::Space;
pub const DEFAULT_INDENT_SIZE: usize = 2;

/// Value editorconfig uses to reset a property to the editor default.
const UNSET: &str = "unset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tab,
    Space,
}

impl FromStr for IndentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tab" => Ok(IndentStyle::Tab),
            "space" => Ok(IndentStyle::Space),
            other => Err(format!("unknown indent style {other:?}")),
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Tab => f.write_str("tab"),
            IndentStyle::Space => f.write_str("space"),
        }
    }
}

/// Indent style and size a matching config is rewritten with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentRules {
    pub style: IndentStyle,
    pub size: usize,
}

impl Default for IndentRules {
    fn default() -> Self {
        Self {
            style: DEFAULT_INDENT_STYLE,
            size: DEFAULT_INDENT_SIZE,
        }
    }
}

/// A section of `.editorconfig` ready to be applied.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub pattern: String,
    pub properties: BTreeMap<String, String>,
    pub indent: IndentRules,
    matcher: PatternMatcher,
}

impl RuleSet {
    /// Build a rule set from one section, filling omitted values from `defaults`.
    pub fn from_section(section: &Section, defaults: IndentRules) -> Result<Self, HookError> {
        let invalid = |key: &str, value: &str| HookError::InvalidRuleValue {
            pattern: section.pattern.clone(),
            key: key.to_string(),
            value: value.to_string(),
        };

        let style = match section.get("indent_style") {
            None | Some(UNSET) => defaults.style,
            Some(value) => value
                .parse::<IndentStyle>()
                .map_err(|_| invalid("indent_style", value))?,
        };

        let size = match section.get("indent_size") {
            None | Some(UNSET) => defaults.size,
            // `tab` defers to tab_width when the section declares one
            Some("tab") => match section.get("tab_width") {
                None | Some(UNSET) => defaults.size,
                Some(width) => parse_size(width).ok_or_else(|| invalid("tab_width", width))?,
            },
            Some(value) => parse_size(value).ok_or_else(|| invalid("indent_size", value))?,
        };

        let matcher =
            PatternMatcher::new(&section.pattern).map_err(|source| HookError::InvalidPattern {
                pattern: section.pattern.clone(),
                source,
            })?;

        Ok(Self {
            pattern: section.pattern.clone(),
            properties: section.properties.clone(),
            indent: IndentRules { style, size },
            matcher,
        })
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.matcher.is_match(filename)
    }
}

fn parse_size(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|&n| n > 0)
}

/// Resolve every section, in declaration order. Fails on the first unusable section.
pub fn resolve_rule_sets(
    file: &EditorconfigFile,
    defaults: IndentRules,
) -> Result<Vec<RuleSet>, HookError> {
    file.sections
        .iter()
        .map(|section| RuleSet::from_section(section, defaults))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editorconfig::parse_editorconfig;

    fn resolve(text: &str) -> Result<Vec<RuleSet>, HookError> {
        resolve_rule_sets(&parse_editorconfig(text).unwrap(), IndentRules::default())
    }

    #[test]
    fn test_explicit_rules() {
        let sets = resolve("[*]\nindent_style = tab\nindent_size = 4\n").unwrap();
        assert_eq!(
            sets[0].indent,
            IndentRules {
                style: IndentStyle::Tab,
                size: 4
            }
        );
    }

    #[test]
    fn test_defaults_when_absent() {
        let sets = resolve("[*.md]\ntrim_trailing_whitespace = false\n").unwrap();
        assert_eq!(sets[0].indent, IndentRules::default());
        assert_eq!(sets[0].indent.style, IndentStyle::Space);
        assert_eq!(sets[0].indent.size, 2);
    }

    #[test]
    fn test_configured_defaults() {
        let file = parse_editorconfig("[*]\n").unwrap();
        let defaults = IndentRules {
            style: IndentStyle::Tab,
            size: 8,
        };
        let sets = resolve_rule_sets(&file, defaults).unwrap();
        assert_eq!(sets[0].indent, defaults);
    }

    #[test]
    fn test_unset_falls_back_to_default() {
        let sets = resolve("[*]\nindent_style = unset\nindent_size = unset\n").unwrap();
        assert_eq!(sets[0].indent, IndentRules::default());
    }

    #[test]
    fn test_indent_size_tab_uses_tab_width() {
        let sets = resolve("[*]\nindent_style = tab\nindent_size = tab\ntab_width = 8\n").unwrap();
        assert_eq!(sets[0].indent.size, 8);

        let sets = resolve("[*]\nindent_size = tab\n").unwrap();
        assert_eq!(sets[0].indent.size, DEFAULT_INDENT_SIZE);
    }

    #[test]
    fn test_non_numeric_indent_size_rejected() {
        let err = resolve("[*.txt]\nindent_size = wide\n").unwrap_err();
        match err {
            HookError::InvalidRuleValue {
                pattern,
                key,
                value,
            } => {
                assert_eq!(pattern, "*.txt");
                assert_eq!(key, "indent_size");
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_indent_size_rejected() {
        assert!(matches!(
            resolve("[*]\nindent_size = 0\n"),
            Err(HookError::InvalidRuleValue { .. })
        ));
    }

    #[test]
    fn test_unknown_indent_style_rejected() {
        assert!(matches!(
            resolve("[*]\nindent_style = tabs\n"),
            Err(HookError::InvalidRuleValue { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(matches!(
            resolve("[[*.txt]\nindent_size = 2\n"),
            Err(HookError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_order_preserved() {
        let sets = resolve("[*]\n[*.txt]\n[*.json]\n").unwrap();
        let patterns: Vec<_> = sets.iter().map(|s| s.pattern.as_str()).collect();
        assert_eq!(patterns, ["*", "*.txt", "*.json"]);
    }

    #[test]
    fn test_rule_set_matches_basename() {
        let sets = resolve("[*.txt]\n").unwrap();
        assert!(sets[0].matches("foo.txt"));
        assert!(!sets[0].matches("foo.json"));
    }

    #[test]
    fn test_indent_style_from_str() {
        assert_eq!("TAB".parse::<IndentStyle>(), Ok(IndentStyle::Tab));
        assert!("tabs".parse::<IndentStyle>().is_err());
        assert_eq!(IndentStyle::Space.to_string(), "space");
    }
}
