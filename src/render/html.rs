// src/render/html.rs
// Indented HTML output. Highlighted cells keep their background colour and are
// additionally rendered bold and red.

use crate::config::consts::HIGHLIGHT_BGCOLOR;
use crate::core::sanitize::escape_html;
use crate::report::Report;
use crate::table::{Cell, Table};

const INDENT: &str = " ";
const HIGHLIGHT_STYLE: &str = "font-weight:bold;color:#C00000";

/// Full document: every table followed by the result paragraph.
pub fn render_document(report: &Report) -> String {
    let mut out = s!("<!DOCTYPE html>\n<html>\n");
    out.push_str(&join!(INDENT, "<head>\n"));
    out.push_str(&join!(INDENT, INDENT, "<meta charset=\"utf-8\">\n"));
    out.push_str(&format!("{INDENT}{INDENT}<title>{}</title>\n", escape_html(&report.name())));
    out.push_str(&join!(INDENT, "</head>\n"));
    out.push_str(&join!(INDENT, "<body>\n"));

    for table in &report.tables {
        write_table(&mut out, table, 2);
    }
    let pad = INDENT.repeat(2);
    out.push_str(&format!("{pad}<p>\n{pad}{INDENT}{}\n{pad}</p>\n", escape_html(&report.result.to_string())));

    out.push_str(&join!(INDENT, "</body>\n"));
    out.push_str("</html>\n");
    out
}

/// A lone table, as written by the per-table export.
pub fn render_table(table: &Table) -> String {
    let mut out = s!();
    write_table(&mut out, table, 0);
    out
}

fn write_table(out: &mut String, table: &Table, depth: usize) {
    let pad = INDENT.repeat(depth);
    if table.class.is_empty() {
        out.push_str(&join!(&pad, "<table>\n"));
    } else {
        out.push_str(&format!("{pad}<table class=\"{}\">\n", escape_html(&table.class)));
    }
    for row in &table.rows {
        out.push_str(&join!(&pad, INDENT, "<tr>\n"));
        for cell in row {
            write_cell(out, cell, depth + 2);
        }
        out.push_str(&join!(&pad, INDENT, "</tr>\n"));
    }
    out.push_str(&join!(&pad, "</table>\n"));
}

fn write_cell(out: &mut String, cell: &Cell, depth: usize) {
    let pad = INDENT.repeat(depth);
    let tag = if cell.header { "th" } else { "td" };
    let text = escape_html(&cell.text);
    if cell.highlighted {
        out.push_str(&format!(
            "{pad}<{tag} bgcolor=\"{HIGHLIGHT_BGCOLOR}\" style=\"{HIGHLIGHT_STYLE}\">{text}</{tag}>\n"
        ));
    } else {
        out.push_str(&format!("{pad}<{tag}>{text}</{tag}>\n"));
    }
}
