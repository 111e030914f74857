// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            for fmt in ExportFormat::ALL {
                ui.selectable_value(&mut export.format, fmt, fmt.label());
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }
    }

    // --- Output dir (+ font for PDF) ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text).desired_width(220.0));

        if app.state.options.export.format == ExportFormat::Pdf {
            ui.label("Font:");
            ui.add(
                egui::TextEdit::singleline(&mut app.font_text)
                    .hint_text("built-in Helvetica")
                    .desired_width(220.0),
            );
        }
    });

    // --- Actions ---
    ui.horizontal(|ui| {
        let has_selection = !app.state.gui.selected_files.is_empty();
        if ui.add_enabled(has_selection, egui::Button::new("Process")).clicked() {
            app.process_selected();
        }

        let has_reports = !app.reports.is_empty();
        if ui.add_enabled(has_reports, egui::Button::new("Export")).clicked() {
            app.export_all();
        }
    });
}
