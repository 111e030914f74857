// src/gui/components/file_panel.rs
//
// Renders the left list of report files and applies selection changes directly to `app`.
// Handles ctrl/shift range behavior and the data directory field.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Reports");

    ui.horizontal(|ui| {
        ui.label("Dir:");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.dir_text).desired_width(110.0));
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            logf!("UI: Data dir → {}", app.dir_text);
            app.rescan();
        }
        if ui.button("Rescan").clicked() {
            app.rescan();
        }
    });

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_files = (0..app.files.len()).collect();
            app.status(format!("Selection: {} file(s)", app.files.len()));
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_files.clear();
            app.last_clicked = None;
            app.status("Selection: none");
        }
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("files_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            let mut changed = false;

            for idx in 0..app.files.len() {
                let name = app.files[idx]
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let is_selected = app.state.gui.selected_files.contains(&idx);

                if ui.selectable_label(is_selected, name).clicked() {
                    let (ctrl, shift) = ui.input(|i| (i.modifiers.ctrl, i.modifiers.shift));
                    apply_click(
                        &mut app.state.gui.selected_files,
                        &mut app.last_clicked,
                        idx,
                        ctrl,
                        shift,
                    );
                    changed = true;
                }
            }

            if changed {
                let n = app.state.gui.selected_files.len();
                app.status(format!("Selection: {} file(s)", n));
                logf!("UI: Selection changed ({} files) {:?}", n, &app.state.gui.selected_files);
            }
        });
}

/// Applies one click on row `idx` to the selection.
///
/// Plain click selects only `idx`; ctrl toggles it; shift selects the range
/// from the last clicked row; ctrl+shift adds that range. Without an anchor,
/// shift behaves like a plain click and ctrl+shift like ctrl.
pub fn apply_click(
    sel: &mut Vec<usize>,
    last_clicked: &mut Option<usize>,
    idx: usize,
    ctrl: bool,
    shift: bool,
) {
    let toggle = |sel: &mut Vec<usize>| {
        if sel.contains(&idx) { sel.retain(|&x| x != idx); } else { sel.push(idx); }
    };

    match (*last_clicked, ctrl, shift) {
        (Some(last), true, true) => {
            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
            for j in lo..=hi {
                if !sel.contains(&j) { sel.push(j); }
            }
        }
        (None, true, true) | (_, true, false) => toggle(sel),
        (Some(last), false, true) => {
            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
            sel.clear();
            sel.extend(lo..=hi);
        }
        _ => {
            sel.clear();
            sel.push(idx);
        }
    }
    *last_clicked = Some(idx);
}
