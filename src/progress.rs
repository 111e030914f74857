// src/progress.rs
use std::path::PathBuf;

/// Lightweight progress reporting for a run over several report files.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of input files.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One input processed; `written` lists its output files (empty when not exporting).
    fn item_done(&mut self, _name: &str, _written: &[PathBuf]) {}

    /// One input could not be read.
    fn item_failed(&mut self, _name: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
