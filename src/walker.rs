use ignore::WalkBuilder;
use std::io;
use std::path::PathBuf;

/// Walk paths and yield file paths, respecting gitignore.
///
/// Dotfiles are included since many config files are dotfiles; `.git` is not.
pub fn walk_paths(paths: &[PathBuf]) -> impl Iterator<Item = io::Result<PathBuf>> {
    let mut all_files = vec![];

    for path in paths {
        let walker = WalkBuilder::new(path)
            .hidden(false)
            .git_ignore(true) // Respect .gitignore
            .git_global(true)
            .git_exclude(true)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                        all_files.push(Ok(entry.into_path()));
                    }
                }
                Err(e) => {
                    all_files.push(Err(io::Error::other(e.to_string())));
                }
            }
        }
    }

    all_files.into_iter()
}
