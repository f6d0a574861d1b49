use crate::error::{ReqscoreError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn result_files(path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(ReqscoreError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|file| {
            file.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}
