// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{DEFAULT_FILES, INPUT_EXTS};
use crate::config::options::{InputOptions, InputSelector};
use crate::error::{ReportError, Result};

/// Turn the input selection into concrete file paths, in processing order.
pub fn resolve_inputs(input: &InputOptions) -> Result<Vec<PathBuf>> {
    let files = match &input.files {
        InputSelector::Defaults => DEFAULT_FILES.iter().map(|f| input.dir.join(f)).collect(),
        InputSelector::Files(names) => names
            .iter()
            .map(|n| input.dir.join(normalize_separators(n)))
            .collect(),
        InputSelector::All => list_report_files(&input.dir)?,
    };
    if files.is_empty() {
        return Err(ReportError::NoInputs(input.dir.clone()));
    }
    Ok(files)
}

/// HTML files directly inside `dir`, sorted by name.
pub fn list_report_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| ReportError::Read { path: dir.to_path_buf(), source };

    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() { continue; }
        let is_report = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| INPUT_EXTS.iter().any(|x| e.eq_ignore_ascii_case(x)))
            .unwrap_or(false);
        if is_report {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

pub fn read_report(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ReportError::Read { path: path.to_path_buf(), source })?;
    // Report pages are UTF-8; tolerate stray bytes rather than dropping the file.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `contents`, creating the parent directory if needed. Overwrites.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|source| ReportError::Write { path: path.to_path_buf(), source })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ReportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ReportError::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}
