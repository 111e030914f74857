// src/report/mod.rs
//! # Report page reading
//!
//! This module knows **how to read a simplex-method report page** and turn it
//! into a [`Report`]: the objective's coefficient map, the selected and
//! augmented simplex tables, and the closing result line.
//!
//! ## What lives here
//! - **Objective parsing** over the page's visible text (`objective`):
//!   the `F(X) = 3x1 + 5x2` declaration and the evaluated answer equation.
//! - **Table reading and selection** (`tables`): style-signature filtering,
//!   pivot-highlight detection, "always keep the last table".
//! - **Assembly** of the per-file [`Report`] ([`build`]).
//!
//! ## What does **not** live here
//! - **File system** concerns (input discovery, output paths): `file`, `runner`.
//! - **Rendering** to HTML/PDF: `render`.
//! - **GUI** state.
//!
//! ## Typical call chain
//! ```text
//! runner::run → runner::process_file → report::build(path, html)
//!                                    ↘ render::write_report
//! ```
//!
//! ## Degradation, not failure
//! Nothing in here returns an error. A page without an objective yields no
//! coefficient map (every lookup reads 0); a page without an evaluated answer
//! yields the fixed fallback result line.
pub mod objective;
pub mod tables;

use std::path::{Path, PathBuf};

use crate::augment;
use crate::core::html;
use crate::table::Table;

pub use objective::{Coefficients, ResultText};

/// Everything extracted from one report page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub source: PathBuf,
    /// `None` when the page declares no objective function.
    pub coefficients: Option<Coefficients>,
    /// Selected tables, already augmented.
    pub tables: Vec<Table>,
    pub result: ResultText,
}

impl Report {
    /// File name of the source, for titles and status lines.
    pub fn name(&self) -> String {
        self.source
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.to_string_lossy().into_owned())
    }
}

/// Run extraction, selection and augmentation over one page.
pub fn build(source: &Path, doc: &str) -> Report {
    let name = source.display();
    let text = html::text_content(doc);

    let coefficients = objective::extract_coefficients(&text);
    match &coefficients {
        Some(c) => logd!("{name}: objective coefficients [{c}]"),
        None => logf!("{name}: no objective function found; coefficients read as 0"),
    }

    let selected = tables::extract_tables(doc);
    if selected.is_empty() {
        logf!("{name}: no simplex tables found");
    }
    let fallback = Coefficients::default();
    let tables = augment::augment_all(selected, coefficients.as_ref().unwrap_or(&fallback));

    let result = objective::extract_result(&text);
    if result.is_fallback() {
        // The fixed message claims an unbounded objective; record whether the page agrees.
        let negative = tables.last().map(|t| t.last_row_has_negative()).unwrap_or(false);
        logf!("{name}: no evaluated objective, using fallback result (last row negative: {negative})");
    }

    Report {
        source: source.to_path_buf(),
        coefficients,
        tables,
        result,
    }
}
