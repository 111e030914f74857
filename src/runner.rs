// src/runner.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{
    config::options::{AppOptions, ExportOptions},
    error::{ReportError, Result},
    file,
    progress::Progress,
    render,
    report::{self, Report},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: usize,
    pub files_written: Vec<PathBuf>,
    /// Inputs that could not be read, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read one report page and run the extraction pipeline over it.
pub fn process_file(path: &Path) -> Result<Report> {
    let doc = file::read_report(path)?;
    Ok(report::build(path, &doc))
}

/// Process inputs one at a time without writing anything (GUI preview).
/// Unreadable inputs are logged and returned separately.
pub fn process_files(
    paths: &[PathBuf],
    mut progress: Option<&mut dyn Progress>,
) -> (Vec<Report>, Vec<(PathBuf, String)>) {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
    }

    let mut reports = Vec::with_capacity(paths.len());
    let mut failed = Vec::new();
    for path in paths {
        let name = display_name(path);
        match process_file(path) {
            Ok(report) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&name, &[]);
                }
                reports.push(report);
            }
            Err(e) => {
                loge!("{}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&name, &e.to_string());
                }
                failed.push((path.clone(), e.to_string()));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    (reports, failed)
}

pub fn export_report(report: &Report, export: &ExportOptions) -> Result<Vec<PathBuf>> {
    let written = render::write_report(report, export)?;
    logf!("Export: {} → {} file(s) ({:?})", report.name(), written.len(), export.format);
    Ok(written)
}

/// Export several reports into one output directory (GUI "Export").
/// Stops before writing a report whose output an earlier one already took.
pub fn export_reports(reports: &[Report], export: &ExportOptions) -> Result<Vec<PathBuf>> {
    let mut claimed = OutputClaims::default();
    let mut written = Vec::new();
    for report in reports {
        claimed.claim(report, export)?;
        written.extend(export_report(report, export)?);
    }
    Ok(written)
}

/// Output paths taken so far in one run, with the source that took them.
#[derive(Default)]
struct OutputClaims(HashMap<PathBuf, PathBuf>);

impl OutputClaims {
    fn claim(&mut self, report: &Report, export: &ExportOptions) -> Result<()> {
        let paths = render::output_paths(report, export);
        if let Some((path, first)) = paths.iter().find_map(|p| self.0.get(p).map(|first| (p, first))) {
            return Err(ReportError::OutputClash { path: path.clone(), first: first.clone() });
        }
        for path in paths {
            self.0.insert(path, report.source.clone());
        }
        Ok(())
    }
}

/// Top-level job: resolve inputs, process each, write its output.
///
/// A file that cannot be read, or whose output an earlier input already took,
/// is recorded in the summary and the run goes on; a file that cannot be
/// written aborts the run.
pub fn run(
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let inputs = file::resolve_inputs(&options.input)?;
    logf!("Run: {} input(s) from {}", inputs.len(), options.input.dir.display());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(inputs.len());
    }

    let mut summary = RunSummary::default();
    let mut claimed = OutputClaims::default();
    for path in &inputs {
        let name = display_name(path);
        let outcome = process_file(path).and_then(|report| {
            claimed.claim(&report, &options.export)?;
            Ok(report)
        });
        match outcome {
            Ok(report) => {
                let written = export_report(&report, &options.export)?;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&name, &written);
                }
                summary.reports += 1;
                summary.files_written.extend(written);
            }
            Err(e) => {
                loge!("{}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&name, &e.to_string());
                }
                summary.failed.push((path.clone(), e.to_string()));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
