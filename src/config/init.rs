//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::CONFIG_FILENAME;

/// Template editorconfig-hook.toml with documentation
pub const HOOK_TOML_TEMPLATE: &str = r#"# editorconfig-hook.toml - Configuration for editorconfig-hook
#
# editorconfig-hook re-indents config files according to the
# indent_style and indent_size rules of a .editorconfig file.
# Sections matching a file always apply; the values below are used
# when a matching section doesn't set indent_style or indent_size.

[hook]
# Indent style for sections without indent_style: "space" or "tab".
# Default: "space"
# default_indent_style = "space"

# Indent size for sections without indent_size.
# Default: 2
# default_indent_size = 2
"#;

/// Generate editorconfig-hook.toml in the specified directory (or current directory if None).
///
/// Returns an error if the file already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(CONFIG_FILENAME), |d| d.join(CONFIG_FILENAME));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{CONFIG_FILENAME} already exists"),
        ));
    }

    fs::write(&path, HOOK_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate editorconfig-hook.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_init_file_creates_file() {
        let dir = TempDir::new().unwrap();

        let path = generate_init_file_in(Some(dir.path())).unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILENAME));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[hook]"));
        assert!(content.contains("default_indent_size"));
    }

    #[test]
    fn test_generate_init_file_fails_if_exists() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "existing").unwrap();

        let result = generate_init_file_in(Some(dir.path()));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_template_is_valid_toml() {
        let parsed: super::super::toml_schema::HookToml =
            toml::from_str(HOOK_TOML_TEMPLATE).unwrap();
        assert!(parsed.hook.default_indent_style.is_none());
    }
}
