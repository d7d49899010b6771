use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not find file {}", .0.display())]
    NotFound(PathBuf),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: bm2md_core::config::ConfigError,
    },

    #[error("no .html files found")]
    NoInputs,

    #[error("multiple input files require --output directory")]
    MissingOutputDir,
}

impl CliError {
    fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        CliError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a bookmark export, replacing invalid UTF-8 rather than failing.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::NotFound(path.to_path_buf()),
        _ => CliError::io("reading", path, e),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_stdin() -> Result<String, CliError> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| CliError::io("reading", Path::new("<stdin>"), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `content` to `path`, creating missing parent directories first.
pub fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::io("creating", parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| CliError::io("writing", path, e))
}

pub fn write_stdout(content: &str) -> Result<(), CliError> {
    io::stdout()
        .write_all(content.as_bytes())
        .map_err(|e| CliError::io("writing", Path::new("<stdout>"), e))
}

fn is_bookmark_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref(),
        Some("html" | "htm")
    )
}

/// Expand directories into their `.html`/`.htm` files; plain paths pass through.
pub fn collect_html_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            if let Ok(entries) = std::fs::read_dir(input) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.is_file() && is_bookmark_file(&path) {
                        files.push(path);
                    }
                }
            }
        } else {
            files.push(input.clone());
        }
    }
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("favourites.html");
        match read_input(&missing) {
            Err(CliError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        std::fs::write(&path, b"<H3>Caf\xe9</H3>").unwrap();
        let text = read_input(&path).unwrap();
        assert_eq!(text, "<H3>Caf\u{fffd}</H3>");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("bookmarks.md");
        write_output(&path, "## Root\n\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "## Root\n\n");
    }

    #[test]
    fn test_collect_html_files_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.html", "a.HTM", "notes.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        std::fs::create_dir(dir.path().join("sub.html")).unwrap();

        let files = collect_html_files(&[dir.path().to_path_buf()]);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.HTM", "b.html"]);
    }

    #[test]
    fn test_collect_keeps_explicit_files() {
        let files = collect_html_files(&[PathBuf::from("export.txt")]);
        assert_eq!(files, vec![PathBuf::from("export.txt")]);
    }
}
