//! CSV file discovery for batch conversion.

use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Recursively list CSV files under a directory, sorted by path.
///
/// Matching is by extension, case-insensitive.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(OutputError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }
    let mut files = Vec::new();
    collect_csv_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_csv_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| OutputError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    for entry_result in entries {
        let entry = entry_result.map_err(|e| OutputError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_csv_files(&path, files)?;
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_nested_csv_files_sorted() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        std::fs::write(dir.path().join("b.csv"), "x\n1\n").expect("write");
        std::fs::write(dir.path().join("a.CSV"), "x\n1\n").expect("write");
        std::fs::write(dir.path().join("sub/c.csv"), "x\n1\n").expect("write");
        std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

        let files = list_csv_files(dir.path()).expect("list");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv", "sub/c.csv"]);
    }

    #[test]
    fn missing_directory_is_input_not_found() {
        let err = list_csv_files(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, OutputError::InputNotFound { .. }));
    }
}
