// src/gui/components/tabs.rs
//
// Renders one tab per processed report and performs the tab switch itself.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.reports.is_empty() {
        ui.label("No reports processed yet. Select files and press Process.");
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.current_tab;
        let mut switch_to = None;

        for (idx, report) in app.reports.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, report.name()).clicked() && !selected {
                switch_to = Some(idx);
            }
        }

        if let Some(idx) = switch_to {
            logf!("UI: Tab switch {} → {}", cur, idx);
            app.state.gui.current_tab = idx;
        }
    });
}
