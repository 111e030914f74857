// src/table.rs
//! In-memory simplex table: rows of cells lifted out of the report page.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// Came from a `<th>`.
    pub header: bool,
    /// Pivot marker (`<td bgcolor="FFA0A0">`).
    pub highlighted: bool,
}

impl Cell {
    pub fn data<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), header: false, highlighted: false }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn th<S: Into<String>>(text: S) -> Self {
        Self { header: true, ..Self::data(text) }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

pub type Row = Vec<Cell>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// The `class` attribute as found on the page.
    pub class: String,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(class: impl Into<String>, rows: Vec<Row>) -> Self {
        Self { class: class.into(), rows }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Column count as read from the first row.
    pub fn ncols(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Widest row; rows of a report table are not guaranteed to be even.
    pub fn max_cols(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_highlight(&self) -> bool {
        self.rows.iter().flatten().any(|c| c.highlighted)
    }

    /// Plain text grid, e.g. for clipboard or logging.
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|c| c.text.clone()).collect())
            .collect()
    }

    /// True when any cell of the final row reads as a negative number.
    pub fn last_row_has_negative(&self) -> bool {
        self.rows
            .last()
            .map(|row| row.iter().any(|c| is_negative_number(&c.text)))
            .unwrap_or(false)
    }
}

fn is_negative_number(text: &str) -> bool {
    let t = text.trim();
    let Some(rest) = t.strip_prefix('-').or_else(|| t.strip_prefix('−')) else {
        return false;
    };
    rest.trim_start().chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_and_highlight() {
        let t = Table::new("table", vec![
            vec![Cell::th("Basis"), Cell::th("B"), Cell::th("x1")],
            vec![Cell::data("x3"), Cell::data("4"), Cell::data("1").highlighted()],
            vec![Cell::data("F")],
        ]);
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 3);
        assert_eq!(t.max_cols(), 3);
        assert!(t.has_highlight());
        assert_eq!(t.text_rows()[1], vec!["x3", "4", "1"]);
    }

    #[test]
    fn negative_last_row_detection() {
        let neg = Table::new("", vec![vec![Cell::data("F(X1)"), Cell::data("12"), Cell::data("−3")]]);
        assert!(neg.last_row_has_negative());

        let dash = Table::new("", vec![vec![Cell::data("-"), Cell::data("0"), Cell::data("-x")]]);
        assert!(!dash.last_row_has_negative());

        assert!(!Table::default().last_row_has_negative());
    }
}
