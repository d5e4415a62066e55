//! Glob matching of config basenames against editorconfig section patterns.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// A compiled section pattern.
///
/// `*` and `?` stay within one path segment, `**` crosses segments, character
/// classes accept `[!...]`. Braces are expanded up front: `{a,b}` alternates,
/// `{n..m}` enumerates integers and a brace pair without either is literal.
/// Matching is case-sensitive.
///
/// A dotfile only matches an alternative that starts with a dot itself, so
/// `{package.json,.travis.yml}` selects `.travis.yml` while `*` does not.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    set: GlobSet,
    dot_allowed: Vec<bool>,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        // Only basenames are matched, so a directory anchor has nothing to anchor to
        let pattern = pattern.strip_prefix('/').unwrap_or(pattern);

        let mut builder = GlobSetBuilder::new();
        let mut dot_allowed = Vec::new();
        for alternative in expand_braces(pattern) {
            builder.add(
                GlobBuilder::new(&alternative)
                    .literal_separator(true)
                    .backslash_escape(true)
                    .build()?,
            );
            dot_allowed.push(alternative.starts_with('.'));
        }

        Ok(Self {
            set: builder.build()?,
            dot_allowed,
        })
    }

    pub fn is_match(&self, filename: &str) -> bool {
        if !filename.starts_with('.') {
            return self.set.is_match(filename);
        }
        self.set
            .matches(filename)
            .into_iter()
            .any(|idx| self.dot_allowed[idx])
    }
}

/// Expand every brace group of `pattern` into plain glob alternatives.
///
/// An unclosed `{` is left in place for globset to reject.
fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    brace_alternatives(&pattern[open + 1..close])
        .into_iter()
        .flat_map(|alt| expand_braces(&format!("{prefix}{alt}{suffix}")))
        .collect()
}

/// Byte offsets of the first top-level `{` and its matching `}`.
fn find_brace_group(pattern: &str) -> Option<(usize, usize)> {
    let mut open = None;
    let mut depth = 0usize;
    let mut escaped = false;
    let mut in_class = false;

    for (idx, c) in pattern.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            _ if in_class => {}
            '{' => {
                if depth == 0 {
                    open = Some(idx);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return open.map(|start| (start, idx));
                }
            }
            _ => {}
        }
    }

    None
}

/// Split a brace body on its top-level commas.
fn brace_alternatives(body: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut escaped = false;

    for c in body.chars() {
        if escaped {
            escaped = false;
            current.push(c);
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }

    if parts.is_empty() {
        return match numeric_range(body) {
            Some(numbers) => numbers,
            None => vec![format!("\\{{{body}\\}}")],
        };
    }

    parts.push(current);
    parts
}

/// `{n..m}`: every integer between the bounds, in either direction.
fn numeric_range(body: &str) -> Option<Vec<String>> {
    let (start, end) = body.split_once("..")?;
    let start: i64 = start.parse().ok()?;
    let end: i64 = end.parse().ok()?;
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    Some((low..=high).map(|n| n.to_string()).collect())
}
