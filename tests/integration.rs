use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TABS: &str = "root = true\n\n[*]\nindent_style = tab\nindent_size = 4\n";

fn hook_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_editorconfig-hook"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    hook_cmd()
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

// ===========================================
// CLI Integration Tests
// ===========================================

#[test]
fn test_formats_with_target_editorconfig() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), TABS).unwrap();
    let file = dir.path().join("foo.txt");
    fs::write(&file, "foo\n  bar\n    baz\n").unwrap();

    let output = run_in(dir.path(), &["foo.txt"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n\tbar\n\t\tbaz\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Formatted:"));
}

#[test]
fn test_check_mode_no_modification() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), TABS).unwrap();
    let file = dir.path().join("foo.txt");
    fs::write(&file, "foo\n  bar\n").unwrap();

    let output = run_in(dir.path(), &["--check", "foo.txt"]);

    // File should not be modified
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n  bar\n");
    // Should exit with 1 (would change)
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("indentation at line 2"));
}

#[test]
fn test_check_mode_exit_code_0_when_formatted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), TABS).unwrap();
    fs::write(dir.path().join("foo.txt"), "foo\n\tbar\n").unwrap();

    let output = run_in(dir.path(), &["--check", "foo.txt"]);

    assert!(output.status.success());
}

#[test]
fn test_quiet_mode_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), TABS).unwrap();
    fs::write(dir.path().join("foo.txt"), "foo\n  bar\n").unwrap();

    let output = run_in(dir.path(), &["--quiet", "foo.txt"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "foo.txt");
    assert!(!stdout.contains("Formatted:"));
}

#[test]
fn test_diff_mode_shows_changes() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), TABS).unwrap();
    fs::write(dir.path().join("foo.txt"), "foo\n  bar\n").unwrap();

    let output = run_in(dir.path(), &["--diff", "foo.txt"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- foo.txt"));
    assert!(stdout.contains("+++ foo.txt"));
    assert!(stdout.contains("-  bar"));
    assert!(stdout.contains("+\tbar"));
}

#[test]
fn test_without_editorconfig_leaves_files() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("foo.txt");
    fs::write(&file, "foo\n  bar").unwrap();

    let output = run_in(dir.path(), &["foo.txt"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n  bar");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can't find .editorconfig config"));
}

#[test]
fn test_malformed_editorconfig_leaves_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), "[*\nindent_style = tab\n").unwrap();
    let file = dir.path().join("foo.txt");
    fs::write(&file, "foo\n  bar\n").unwrap();

    let output = run_in(dir.path(), &["foo.txt"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n  bar\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can't parse .editorconfig config"));
}

#[test]
fn test_directory_scoped_by_pattern() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".editorconfig"),
        "[*.txt]\nindent_style = space\nindent_size = 4\n",
    )
    .unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/a.txt"), "a\n  b\n").unwrap();
    fs::write(dir.path().join("nested/b.json"), "{\n  \"a\": 1\n}\n").unwrap();

    let output = run_in(dir.path(), &["."]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("nested/a.txt")).unwrap(),
        "a\n    b\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("nested/b.json")).unwrap(),
        "{\n  \"a\": 1\n}\n"
    );
    // The rules file itself is never rewritten
    assert_eq!(
        fs::read_to_string(dir.path().join(".editorconfig")).unwrap(),
        "[*.txt]\nindent_style = space\nindent_size = 4\n"
    );
}

#[test]
fn test_target_option() {
    let rules = TempDir::new().unwrap();
    fs::write(rules.path().join(".editorconfig"), TABS).unwrap();
    let work = TempDir::new().unwrap();
    let file = work.path().join("foo.txt");
    fs::write(&file, "foo\n  bar\n").unwrap();

    let output = run_in(
        work.path(),
        &["--target", rules.path().to_str().unwrap(), "foo.txt"],
    );

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n\tbar\n");
}

#[test]
fn test_skip_binary_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), TABS).unwrap();
    let file = dir.path().join("binary.bin");
    fs::write(&file, b"  hello\x00world").unwrap();

    let output = run_in(dir.path(), &["binary.bin"]);

    assert_eq!(fs::read(&file).unwrap(), b"  hello\x00world");
    assert!(output.status.success());
}

// ===========================================
// Configuration
// ===========================================

#[test]
fn test_cli_indent_size_for_bare_section() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), "[*.txt]\n").unwrap();
    let file = dir.path().join("foo.txt");
    fs::write(&file, "foo\n  bar\n").unwrap();

    let output = run_in(dir.path(), &["--indent-size", "3", "foo.txt"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n   bar\n");
}

#[test]
fn test_config_file_defaults() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(
        dir.path().join("editorconfig-hook.toml"),
        "[hook]\ndefault_indent_style = \"tab\"\n",
    )
    .unwrap();
    fs::write(dir.path().join(".editorconfig"), "[*.txt]\n").unwrap();
    let file = dir.path().join("foo.txt");
    fs::write(&file, "foo\n  bar\n").unwrap();

    let output = run_in(dir.path(), &["foo.txt"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n\tbar\n");
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(
        dir.path().join("editorconfig-hook.toml"),
        "[hook]\ndefault_indent_style = \"tab\"\n",
    )
    .unwrap();
    fs::write(dir.path().join(".editorconfig"), "[*.txt]\n").unwrap();
    let file = dir.path().join("foo.txt");
    fs::write(&file, "foo\n  bar\n").unwrap();

    let output = run_in(dir.path(), &["--indent-style", "space", "--indent-size", "4", "foo.txt"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo\n    bar\n");
}

#[test]
fn test_rejects_zero_indent_size() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--indent-size", "0", "."]);
    assert!(!output.status.success());
}

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["--init"]);

    assert!(output.status.success());
    let content = fs::read_to_string(dir.path().join("editorconfig-hook.toml")).unwrap();
    assert!(content.contains("[hook]"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("editorconfig-hook.toml"), "existing").unwrap();

    let output = run_in(dir.path(), &["--init"]);

    assert!(!output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("editorconfig-hook.toml")).unwrap(),
        "existing"
    );
}
