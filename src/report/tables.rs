// src/report/tables.rs

use crate::config::consts::{HIGHLIGHT_BGCOLOR, TABLE_CLASSES};
use crate::core::html::{self, Element, Scanner};
use crate::table::{Cell, Table};

/// Every `<table>` on the page, in document order.
pub fn read_tables(doc: &str) -> Vec<Table> {
    let scan = Scanner::new(doc);
    scan.elements("table", 0..scan.len(), &[])
        .iter()
        .map(|el| read_table(&scan, el))
        .collect()
}

/// Tables carrying the simplex-table style signature.
///
/// Looser than an exact `class` match: the three classes may come in any
/// order and extra classes are allowed.
pub fn matching_tables(tables: Vec<Table>) -> Vec<Table> {
    tables
        .into_iter()
        .filter(|t| html::has_classes(&t.class, TABLE_CLASSES))
        .collect()
}

/// Keep tables with a highlighted (pivot) cell, plus always the last one.
pub fn select(tables: Vec<Table>) -> Vec<Table> {
    let last = tables.len().checked_sub(1);
    tables
        .into_iter()
        .enumerate()
        .filter(|(i, t)| t.has_highlight() || Some(*i) == last)
        .map(|(_, t)| t)
        .collect()
}

/// Read, filter by style, and select in one go.
pub fn extract_tables(doc: &str) -> Vec<Table> {
    let all = read_tables(doc);
    let total = all.len();
    let styled = matching_tables(all);
    let styled_n = styled.len();
    let selected = select(styled);
    logd!("Tables: {} on page, {} styled, {} selected", total, styled_n, selected.len());
    selected
}

pub fn is_highlight_color(value: &str) -> bool {
    value.trim().trim_start_matches('#').eq_ignore_ascii_case(HIGHLIGHT_BGCOLOR)
}

/* ---------- helpers ---------- */

fn read_table(scan: &Scanner, table: &Element) -> Table {
    let class = html::attr_value(table.open_tag, "class").unwrap_or_default();

    let mut rows = Vec::new();
    for tr in scan.elements("tr", table.inner.clone(), &["tr"]) {
        let mut cells = Vec::new();
        let mut pos = tr.inner.start;
        while let Some(cell) = scan.next_element(&["td", "th"], pos, tr.inner.end, &["td", "th"]) {
            pos = cell.end;
            cells.push(read_cell(scan, &cell));
        }
        rows.push(cells);
    }
    Table::new(class, rows)
}

fn read_cell(scan: &Scanner, el: &Element) -> Cell {
    let text = html::text_content(scan.slice(el.inner.clone()));
    if el.name == "th" {
        return Cell::th(text);
    }
    let cell = Cell::data(text);
    match html::attr_value(el.open_tag, "bgcolor") {
        Some(color) if is_highlight_color(&color) => cell.highlighted(),
        _ => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(body: &str) -> String {
        format!(r#"<table class="table table-bordered table-center">{body}</table>"#)
    }

    fn named(name: &str, highlighted: bool) -> Table {
        let cell = if highlighted { Cell::data(name).highlighted() } else { Cell::data(name) };
        Table::new("table table-bordered table-center", vec![vec![cell]])
    }

    #[test]
    fn select_keeps_highlighted_and_last() {
        let tables = vec![named("t1", false), named("t2", true), named("t3", false), named("t4", false)];
        let picked: Vec<String> = select(tables).iter().map(|t| t.rows[0][0].text.clone()).collect();
        assert_eq!(picked, vec!["t2", "t4"]);
    }

    #[test]
    fn select_does_not_duplicate_highlighted_last() {
        let tables = vec![named("t1", true), named("t2", true)];
        assert_eq!(select(tables).len(), 2);
        assert!(select(Vec::new()).is_empty());
    }

    #[test]
    fn reads_rows_and_cells() {
        let doc = styled(
            "<thead><tr><th>Basis</th><th>B</th><th>x1</th></tr></thead>\
             <tbody><tr><td> x3 </td><td>4</td><td BGCOLOR=\"#ffa0a0\">1</td></tr>\
             <tr><td>F(X0)<td>0<td>-3</tr></tbody>",
        );
        let tables = read_tables(&doc);
        assert_eq!(tables.len(), 1);
        let t = &tables[0];
        assert_eq!(t.nrows(), 3);
        assert!(t.rows[0].iter().all(|c| c.header));
        assert_eq!(t.rows[1][0].text, "x3");
        assert!(t.rows[1][2].highlighted);
        assert!(!t.rows[1][1].highlighted);
        assert_eq!(t.text_rows()[2], vec!["F(X0)", "0", "-3"]);
    }

    #[test]
    fn style_signature_filters_tables() {
        let doc = format!(
            "<table class=\"table\"><tr><td bgcolor=FFA0A0>skip</td></tr></table>{}",
            styled("<tr><td>keep</td></tr>")
        );
        let picked = extract_tables(&doc);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].rows[0][0].text, "keep");
    }

    #[test]
    fn style_signature_accepts_any_class_order_and_extras() {
        let doc = "<table class=\"table-center table table-bordered\"><tr><td>reordered</td></tr></table>\
                   <table class=\"table table-bordered table-center table-striped\"><tr><td>extra</td></tr></table>\
                   <table class=\"table table-bordered\"><tr><td>partial</td></tr></table>";
        let kept: Vec<String> = matching_tables(read_tables(doc))
            .iter()
            .map(|t| t.rows[0][0].text.clone())
            .collect();
        assert_eq!(kept, vec!["reordered", "extra"]);
    }

    #[test]
    fn highlight_on_th_is_ignored() {
        let doc = styled("<tr><th bgcolor=FFA0A0>h</th></tr>");
        assert!(!read_tables(&doc)[0].has_highlight());
    }

    #[test]
    fn highlight_color_forms() {
        assert!(is_highlight_color("FFA0A0"));
        assert!(is_highlight_color(" #ffa0a0"));
        assert!(!is_highlight_color("FFA0A1"));
    }
}
