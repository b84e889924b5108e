use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

const CONTENT_EXTENSIONS: &[&str] = &["html", "htm", "md", "txt"];

/// Files to estimate for every given path. Directories are walked
/// recursively and filtered by extension, files are taken as they are.
/// A path that is neither a file nor a directory is an error.
pub fn collect_files_for_processing(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            anyhow::bail!("Path '{}' is neither a file nor a directory.", path.display());
        }

        for file in WalkDir::new(path).sort_by_file_name() {
            let file =
                file.with_context(|| format!("Unable to walk directory '{}'.", path.display()))?;
            if !file.file_type().is_file() || !is_content_file(file.path()) {
                continue;
            }

            files.push(file.path().to_path_buf());
            tracing::trace!(
                "Added file '{}' to processing tasks.",
                file.path().display()
            );
        }
    }

    Ok(files)
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map_or(false, |extension| {
            CONTENT_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
        })
}

pub fn read_body(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read file '{}'.", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_collect_filters_directories_by_extension() {
        let directory = tempfile::tempdir().unwrap();
        let root = directory.path();
        fs::create_dir_all(root.join("posts/2024")).unwrap();
        fs::write(root.join("index.html"), "<p>home</p>").unwrap();
        fs::write(root.join("posts/2024/first.md"), "first post").unwrap();
        fs::write(root.join("posts/notes.TXT"), "notes").unwrap();
        fs::write(root.join("posts/image.png"), [0u8; 4]).unwrap();
        fs::write(root.join("style.css"), "p {}").unwrap();

        let files = collect_files_for_processing(&[root.to_path_buf()]).unwrap();
        let mut names: Vec<_> = files
            .iter()
            .map(|file| file.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("posts/2024/first.md"),
                PathBuf::from("posts/notes.TXT"),
            ]
        );
    }

    #[test]
    fn test_collect_takes_explicit_files() {
        let directory = tempfile::tempdir().unwrap();
        let file = directory.path().join("article.body");
        fs::write(&file, "text").unwrap();

        assert_eq!(
            collect_files_for_processing(&[file.clone()]).unwrap(),
            vec![file]
        );
    }

    #[test]
    fn test_collect_rejects_missing_path() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(directory.path().join("present.html"), "text").unwrap();
        let missing = directory.path().join("missing.html");

        let error =
            collect_files_for_processing(&[directory.path().to_path_buf(), missing]).unwrap_err();
        assert!(error.to_string().contains("missing.html"));
    }

    #[test]
    fn test_read_body_missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let error = read_body(&directory.path().join("missing.html")).unwrap_err();

        assert!(error.to_string().contains("missing.html"));
    }
}
