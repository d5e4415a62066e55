use std::collections::BTreeMap;

use crate::editorconfig::IndentStyle;

/// How a config's content should be laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRules {
    pub indent_type: IndentStyle,
    pub indent_size: usize,
    /// Ensure the content ends with a line terminator
    pub eof: bool,
}

/// Indentation unit found in existing content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Tab,
    Spaces(usize),
}

/// Detect the indentation unit of `content`.
///
/// Tabs win if more indented lines start with a tab than with a space. For
/// spaces the unit is the most common change in indentation width between
/// consecutive non-blank lines, preferring the smaller width on a tie.
pub fn detect_indent(content: &str) -> Option<Indent> {
    let mut tab_lines = 0usize;
    let mut space_lines = 0usize;
    let mut steps: BTreeMap<usize, usize> = BTreeMap::new();
    let mut previous = 0usize;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('\t') {
            tab_lines += 1;
            continue;
        }

        let width = line.len() - line.trim_start_matches(' ').len();
        if width > 0 {
            space_lines += 1;
        }
        let step = width.abs_diff(previous);
        if step > 0 {
            *steps.entry(step).or_default() += 1;
        }
        previous = width;
    }

    if tab_lines == 0 && space_lines == 0 {
        return None;
    }
    if tab_lines > space_lines {
        return Some(Indent::Tab);
    }

    steps
        .into_iter()
        .fold(None, |best: Option<(usize, usize)>, (step, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((step, count)),
        })
        .map(|(step, _)| Indent::Spaces(step))
}

/// Re-indent `content` according to `rules`.
///
/// Each line keeps its indentation level; only the unit changes. Line
/// terminators are left as found.
pub fn apply_format(filename: &str, content: &str, rules: &FormatRules) -> String {
    let indent_type = if is_yaml(filename) {
        // YAML does not allow tab indentation
        IndentStyle::Space
    } else {
        rules.indent_type
    };
    let unit = match indent_type {
        IndentStyle::Tab => "\t".to_string(),
        IndentStyle::Space => " ".repeat(rules.indent_size),
    };

    let mut result = match detect_indent(content) {
        Some(detected) => reindent(content, detected, &unit),
        None => content.to_string(),
    };

    if rules.eof && !result.is_empty() && !result.ends_with('\n') {
        result.push_str(line_terminator(content));
    }

    result
}

fn reindent(content: &str, detected: Indent, unit: &str) -> String {
    let mut result = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);

        if body.trim().is_empty() {
            result.push_str(line);
            continue;
        }

        let (level, remainder, rest) = match detected {
            Indent::Tab => {
                let rest = body.trim_start_matches('\t');
                (body.len() - rest.len(), 0, rest)
            }
            Indent::Spaces(width) => {
                let rest = body.trim_start_matches(' ');
                let leading = body.len() - rest.len();
                (leading / width, leading % width, rest)
            }
        };

        result.push_str(&unit.repeat(level));
        result.push_str(&" ".repeat(remainder));
        result.push_str(rest);
        result.push_str(terminator);
    }

    result
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn line_terminator(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn is_yaml(filename: &str) -> bool {
    filename.ends_with(".yml") || filename.ends_with(".yaml")
}
