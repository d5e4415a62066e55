//! `.editorconfig` support.
//!
//! This module provides:
//! - Locating the rule text among merged configs or in the target directory
//! - Parsing it into ordered `[pattern]` sections
//! - Resolving each section into typed indentation rules

mod parser;
mod rules;
mod source;

pub use parser::{parse_editorconfig, EditorconfigFile, ParseError, Section};
pub use rules::{
    resolve_rule_sets, IndentRules, IndentStyle, RuleSet, DEFAULT_INDENT_SIZE,
    DEFAULT_INDENT_STYLE,
};
pub use source::{find_merged_editorconfig, resolve_source, RuleSource, EDITORCONFIG_FILENAME};
