// src/gui/components/report_view.rs
//
// Draws the current report: coefficients, the augmented tables and the result line.
// Purely a view.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};
use crate::{
    gui::app::App,
    table::{Cell, Table},
};

const HIGHLIGHT_TEXT: Color32 = Color32::from_rgb(192, 0, 0);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(report) = app.current_report() else { return };

    egui::ScrollArea::both()
        .id_salt("report_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            match &report.coefficients {
                Some(c) if !c.is_empty() => ui.label(format!("Objective coefficients: {}", c)),
                Some(_) => ui.label("Objective function declared without coefficients"),
                None => ui.label(RichText::new("No objective function found; coefficients read as 0").italics()),
            };
            ui.label(format!("{} table(s)", report.tables.len()));

            for (idx, table) in report.tables.iter().enumerate() {
                ui.add_space(6.0);
                draw_table(ui, idx, table);
            }

            ui.add_space(8.0);
            let result = RichText::new(report.result.to_string()).strong();
            ui.label(if report.result.is_fallback() { result.color(HIGHLIGHT_TEXT) } else { result });
        });
}

fn draw_table(ui: &mut egui::Ui, idx: usize, table: &Table) {
    let cols = table.max_cols();
    if cols == 0 {
        ui.label("(empty table)");
        return;
    }

    ui.push_id(("report_table", idx), |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .columns(Column::auto().at_least(36.0), cols)
            .body(|mut body| {
                for row in &table.rows {
                    body.row(20.0, |mut tr| {
                        for c in 0..cols {
                            tr.col(|ui| {
                                if let Some(cell) = row.get(c) {
                                    ui.label(cell_text(cell));
                                }
                            });
                        }
                    });
                }
            });
    });
}

fn cell_text(cell: &Cell) -> RichText {
    let text = RichText::new(&cell.text);
    if cell.highlighted {
        text.strong().color(HIGHLIGHT_TEXT)
    } else if cell.header {
        text.strong()
    } else {
        text
    }
}
