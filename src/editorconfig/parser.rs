//! `.editorconfig` text parsing

use std::collections::BTreeMap;

use thiserror::Error;

/// Grammar errors, reported with the 1-based line they occur on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated section header at line {line}")]
    UnterminatedSection { line: usize },
    #[error("empty section name at line {line}")]
    EmptySection { line: usize },
    #[error("expected `key = value` at line {line}")]
    MissingAssignment { line: usize },
    #[error("empty property name at line {line}")]
    EmptyKey { line: usize },
    #[error("root must be true or false, found {value:?} at line {line}")]
    InvalidRoot { line: usize, value: String },
}

/// One `[pattern]` section with its properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub pattern: String,
    pub properties: BTreeMap<String, String>,
}

impl Section {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// A parsed `.editorconfig`: the optional root flag and sections in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorconfigFile {
    pub root: Option<bool>,
    pub sections: Vec<Section>,
}

/// Properties whose values editorconfig treats case-insensitively.
const CASE_INSENSITIVE_KEYS: &[&str] = &["indent_style", "indent_size", "tab_width", "root"];

/// Parse `.editorconfig` text.
///
/// Properties are written `key = value` or `key: value`. A `#` or `;` that
/// starts a word opens a comment running to the end of the line, after a
/// section header as well as after a value.
///
/// Properties before the first section make up the preamble, where only `root`
/// means anything. It never turns into a section.
pub fn parse_editorconfig(content: &str) -> Result<EditorconfigFile, ParseError> {
    let mut file = EditorconfigFile::default();
    let mut current: Option<Section> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let pattern = section_pattern(header)
                .ok_or(ParseError::UnterminatedSection { line: line_no })?
                .trim();
            if pattern.is_empty() {
                return Err(ParseError::EmptySection { line: line_no });
            }
            if let Some(done) = current.take() {
                file.sections.push(done);
            }
            current = Some(Section {
                pattern: pattern.to_string(),
                properties: BTreeMap::new(),
            });
            continue;
        }

        let (key, value) = line
            .split_once(['=', ':'])
            .ok_or(ParseError::MissingAssignment { line: line_no })?;
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(ParseError::EmptyKey { line: line_no });
        }
        let value = strip_inline_comment(value).trim();
        let value = if CASE_INSENSITIVE_KEYS.contains(&key.as_str()) {
            value.to_lowercase()
        } else {
            value.to_string()
        };

        match current.as_mut() {
            Some(section) => {
                section.properties.insert(key, value);
            }
            None if key == "root" => {
                let root = match value.as_str() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                };
                file.root = Some(root.ok_or(ParseError::InvalidRoot {
                    line: line_no,
                    value,
                })?);
            }
            None => {
                tracing::debug!(key = %key, line = line_no, "ignoring preamble property");
            }
        }
    }

    if let Some(done) = current {
        file.sections.push(done);
    }

    Ok(file)
}

/// The pattern of a section header with its leading `[` already removed.
///
/// Closes at the first `]` followed by nothing or a comment, so brackets inside
/// the pattern (`[[ab].txt]`) and in a trailing comment (`[*] # [all]`) both work.
fn section_pattern(header: &str) -> Option<&str> {
    header
        .match_indices(']')
        .map(|(idx, _)| idx)
        .find(|&idx| {
            let rest = header[idx + 1..].trim_start();
            rest.is_empty() || rest.starts_with(['#', ';'])
        })
        .map(|idx| &header[..idx])
}

/// Drop a ` # ...` or ` ; ...` comment trailing a value.
fn strip_inline_comment(value: &str) -> &str {
    let mut prev_blank = true;
    for (idx, c) in value.char_indices() {
        if prev_blank && (c == '#' || c == ';') {
            return &value[..idx];
        }
        prev_blank = c.is_whitespace();
    }
    value
}
