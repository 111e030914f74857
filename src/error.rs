// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no report files found in {}", .0.display())]
    NoInputs(PathBuf),

    #[error("cannot load font {}: {message}", .path.display())]
    Font { path: PathBuf, message: String },

    #[error("{} would overwrite the output of {}", .path.display(), .first.display())]
    OutputClash { path: PathBuf, first: PathBuf },

    #[error("\"{text}\" cannot be drawn with the builtin PDF fonts; pass a TrueType font (--font)")]
    NeedsFont { text: String },

    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
