// src/augment.rs
//! Coefficient annotation of selected simplex tables.
//!
//! A table
//! ```text
//!  Basis | B  | x1 | x2 | x3 | x4
//!  x3    | 4  | 1  | 0  | 1  | 0
//!  x4    | 12 | 0  | 2  | 0  | 1
//!  F(X0) | 0  | -3 | -5 | 0  | 0
//! ```
//! with `F(X) = 3x1 + 5x2` becomes
//! ```text
//!     | C     | -  | 3  | 5  | 0  | 0
//!     | Basis | B  | x1 | x2 | x3 | x4
//!  0  | x3    | 4  | 1  | 0  | 1  | 0
//!  0  | x4    | 12 | 0  | 2  | 0  | 1
//!     | F(X0) | 0  | -3 | -5 | 0  | 0
//! ```

use crate::config::consts::{HEADER_FILLER, HEADER_LABEL};
use crate::report::objective::Coefficients;
use crate::table::{Cell, Row, Table};

/// Prepend the coefficient header row and the leading coefficient column.
pub fn augment(table: Table, coefficients: &Coefficients) -> Table {
    let Table { class, rows: original } = table;
    let ncols = original.first().map(|r| r.len()).unwrap_or(0);

    let mut header: Row = Vec::with_capacity(ncols.max(2) + 1);
    header.push(Cell::data(HEADER_LABEL));
    header.push(Cell::data(HEADER_FILLER));
    header.extend(
        (1..=ncols.saturating_sub(2)).map(|i| Cell::data(coefficients.for_index(i).to_string())),
    );

    let mut rows = Vec::with_capacity(original.len() + 1);
    rows.push(header);
    rows.extend(original);

    // Blank lead for the new header, the page's own header row and the objective row.
    let last = rows.len() - 1;
    for (i, row) in rows.iter_mut().enumerate() {
        let lead = if i == 0 || i == 1 || i == last {
            Cell::blank()
        } else {
            let var = row.first().map(|c| c.text.trim()).unwrap_or("");
            Cell::data(coefficients.get(var).to_string())
        };
        row.insert(0, lead);
    }

    Table { class, rows }
}

pub fn augment_all(tables: Vec<Table>, coefficients: &Coefficients) -> Vec<Table> {
    tables.into_iter().map(|t| augment(t, coefficients)).collect()
}
