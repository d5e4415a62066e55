use crate::colors::Colors;
use crate::HookConfig;
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Diff,
}

pub struct Config {
    pub check_only: bool,
    pub output_mode: OutputMode,
    /// Directory whose `.editorconfig` is used when none is among the files
    pub target_path: PathBuf,
    pub hook: HookConfig,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
    pub verbose: bool,
    pub show_progress: bool,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool, verbose: bool, show_progress: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
            verbose,
            show_progress,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct RunResult {
    pub files_formatted: usize,
    pub files_with_problems: usize,
}

impl RunResult {
    pub fn has_problems(&self) -> bool {
        self.files_with_problems > 0
    }
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start_matches([' ', '\t']).len()]
}

/// 1-based numbers of lines whose leading whitespace differs.
fn reindented_lines(original: &str, formatted: &str) -> Vec<usize> {
    original
        .lines()
        .zip(formatted.lines())
        .enumerate()
        .filter(|(_, (before, after))| leading_whitespace(before) != leading_whitespace(after))
        .map(|(i, _)| i + 1)
        .collect()
}

pub fn print_check_result(name: &str, original: &str, formatted: &str, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        println!("{name}");
        return;
    }

    println!("{}Error:{} {}", ctx.colors.error, ctx.colors.reset(), name);

    if !original.is_empty() && !original.ends_with('\n') && formatted.ends_with('\n') {
        println!("  - missing EOF newline");
    }
    for line in reindented_lines(original, formatted) {
        println!("  - indentation at line {line}");
    }
}

pub fn print_fix_result(name: &str, original: &str, formatted: &str, ctx: &OutputContext) {
    match ctx.mode {
        OutputMode::Quiet => println!("{name}"),
        OutputMode::Diff => print_diff(name, original, formatted),
        OutputMode::Normal => {
            println!(
                "{}Formatted:{} {}",
                ctx.colors.success,
                ctx.colors.reset(),
                name
            );
        }
    }
}

pub fn print_skipped(path: &Path, reason: &str, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{}Skipping {}: {}{}",
        ctx.colors.info,
        reason,
        ctx.colors.reset(),
        path.display()
    );
}

pub fn print_diff(label: &str, original: &str, content: &str) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
            }
        }
    }
}

pub fn print_summary(result: &RunResult, config: &Config, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }

    if config.check_only {
        if result.files_with_problems > 0 {
            println!();
            println!(
                "{}{} files with problems{}",
                ctx.colors.error,
                result.files_with_problems,
                ctx.colors.reset()
            );
        }
    } else if result.files_formatted > 0 {
        println!();
        println!(
            "{}{} files formatted{}",
            ctx.colors.success,
            result.files_formatted,
            ctx.colors.reset()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindented_lines() {
        let lines = reindented_lines("foo\n  bar\n    baz\n", "foo\n\tbar\n\t\tbaz\n");
        assert_eq!(lines, [2, 3]);
    }

    #[test]
    fn test_reindented_lines_ignores_unchanged() {
        assert!(reindented_lines("a\n\tb\n", "a\n\tb\n").is_empty());
    }

    #[test]
    fn test_has_problems() {
        let mut result = RunResult::default();
        assert!(!result.has_problems());
        result.files_with_problems = 1;
        assert!(result.has_problems());
    }
}
