// src/render/mod.rs
pub mod html;
pub mod pdf;

use std::path::PathBuf;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::Result;
use crate::file::write_output;
use crate::report::Report;

/// Files `write_report` would produce for `report`, in write order.
pub fn output_paths(report: &Report, export: &ExportOptions) -> Vec<PathBuf> {
    match export.format {
        ExportFormat::Html | ExportFormat::Pdf => vec![export.document_path(&report.source)],
        ExportFormat::TablesHtml => (1..=report.tables.len())
            .map(|i| export.table_path(&report.source, i))
            .collect(),
    }
}

/// Write `report` in the configured format. Returns the paths written.
pub fn write_report(report: &Report, export: &ExportOptions) -> Result<Vec<PathBuf>> {
    match export.format {
        ExportFormat::Html => {
            let path = export.document_path(&report.source);
            write_output(&path, html::render_document(report).as_bytes())?;
            Ok(vec![path])
        }
        ExportFormat::Pdf => {
            let bytes = pdf::render_document(report, export.pdf_font.as_deref())?;
            let path = export.document_path(&report.source);
            write_output(&path, &bytes)?;
            Ok(vec![path])
        }
        ExportFormat::TablesHtml => {
            let mut written = Vec::with_capacity(report.tables.len());
            for (i, table) in report.tables.iter().enumerate() {
                let path = export.table_path(&report.source, i + 1);
                write_output(&path, html::render_table(table).as_bytes())?;
                written.push(path);
            }
            Ok(written)
        }
    }
}
