// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub input: InputOptions,
    pub export: ExportOptions,
}

/// Which report files in the data directory to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSelector {
    /// The fixed `data1..3.html` set.
    Defaults,
    /// Every HTML file in the directory, sorted by name.
    All,
    /// Explicit names (relative to the directory unless absolute).
    Files(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOptions {
    pub dir: PathBuf,
    pub files: InputSelector,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DATA_DIR),
            files: InputSelector::Defaults,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// One HTML document per input: tables + result paragraph.
    Html,
    /// One PDF per input: tables + result paragraph.
    Pdf,
    /// One bare HTML file per table.
    TablesHtml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Html, ExportFormat::Pdf, ExportFormat::TablesHtml];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html | ExportFormat::TablesHtml => "html",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Pdf => "PDF",
            ExportFormat::TablesHtml => "HTML per table",
        }
    }

    /// Name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "html" => Some(ExportFormat::Html),
            "pdf" => Some(ExportFormat::Pdf),
            "tables" => Some(ExportFormat::TablesHtml),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    /// TrueType font for PDF output; builtin Courier/Helvetica when unset.
    pub pdf_font: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Html,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            pdf_font: None,
        }
    }
}

impl ExportOptions {
    /// `<out>/<stem>.<ext>` for whole-document formats.
    ///
    /// Only a `.html` source is reduced to its stem; any other source keeps its
    /// full file name (`a.htm` → `a.htm.pdf`), so `a.html` and `a.htm` in the
    /// same directory get distinct outputs.
    pub fn document_path(&self, source: &Path) -> PathBuf {
        let base = match source.extension().and_then(|e| e.to_str()) {
            Some("html") => source.file_stem(),
            _ => source.file_name(),
        };
        let base = base
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!("report"));
        self.out_dir.join(join!(&base, ".", self.format.ext()))
    }

    /// `<out>/<file name>_table_<index>.html`, index is 1-based.
    pub fn table_path(&self, source: &Path, index: usize) -> PathBuf {
        let name = source
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!("report"));
        self.out_dir
            .join(format!("{name}{TABLE_FILE_INFIX}{index}.html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_the_cli() {
        assert_eq!(ExportFormat::from_name("PDF"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_name("tables"), Some(ExportFormat::TablesHtml));
        assert_eq!(ExportFormat::from_name("docx"), None);
    }

    #[test]
    fn output_paths_follow_source_names() {
        let export = ExportOptions { out_dir: PathBuf::from("out"), ..Default::default() };
        let src = Path::new("data/data1.html");
        assert_eq!(export.document_path(src), PathBuf::from("out").join("data1.html"));
        assert_eq!(export.table_path(src, 2), PathBuf::from("out").join("data1.html_table_2.html"));

        let pdf = ExportOptions { format: ExportFormat::Pdf, ..export };
        assert_eq!(pdf.document_path(src), PathBuf::from("out").join("data1.pdf"));
    }

    #[test]
    fn same_stem_sources_get_distinct_documents() {
        let export = ExportOptions { out_dir: PathBuf::from("out"), ..Default::default() };
        let html = export.document_path(Path::new("a.html"));
        let htm = export.document_path(Path::new("a.htm"));
        let upper = export.document_path(Path::new("a.HTML"));
        assert_eq!(html, PathBuf::from("out").join("a.html"));
        assert_eq!(htm, PathBuf::from("out").join("a.htm.html"));
        assert_eq!(upper, PathBuf::from("out").join("a.HTML.html"));
    }
}
