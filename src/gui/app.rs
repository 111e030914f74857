// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    file,
    report::Report,
    runner,
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Simplex Tables",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // report files found in the data dir (selection lives inside state.gui)
    pub files: Vec<PathBuf>,
    pub last_clicked: Option<usize>,

    // text field UX (we map these <-> options on use)
    pub dir_text: String,
    pub out_dir_text: String,
    pub font_text: String,

    // processed reports, one tab each
    pub reports: Vec<Report>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let dir_text = state.options.input.dir.to_string_lossy().into_owned();
        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();
        let font_text = state.options.export.pdf_font
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut app = Self {
            state,
            files: Vec::new(),
            last_clicked: None,
            dir_text,
            out_dir_text,
            font_text,
            reports: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        app.rescan();
        logf!("Init: {} report file(s) in {}", app.files.len(), app.dir_text);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn current_report(&self) -> Option<&Report> {
        self.reports.get(self.state.gui.current_tab)
    }

    /// Re-read the data directory from the text field; selects everything found.
    pub fn rescan(&mut self) {
        let dir = PathBuf::from(file::normalize_separators(self.dir_text.trim()));
        self.state.options.input.dir = dir.clone();

        match file::list_report_files(&dir) {
            Ok(files) => {
                self.status(format!("{} report file(s) in {}", files.len(), dir.display()));
                self.files = files;
            }
            Err(e) => {
                logd!("Scan: {}", e);
                self.status(e.to_string());
                self.files.clear();
            }
        }
        self.state.gui.selected_files = (0..self.files.len()).collect();
        self.last_clicked = None;
    }

    /// Selected files in list order.
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        let mut idx = self.state.gui.selected_files.clone();
        idx.sort_unstable();
        idx.dedup();
        idx.iter().filter_map(|&i| self.files.get(i).cloned()).collect()
    }

    pub fn process_selected(&mut self) {
        let paths = self.selected_paths();
        if paths.is_empty() {
            self.status("Nothing selected");
            return;
        }
        let mut progress = GuiProgress::new(Arc::clone(&self.status));
        let (reports, failed) = runner::process_files(&paths, Some(&mut progress));
        logf!("UI: Processed {} report(s), {} failed", reports.len(), failed.len());

        self.reports = reports;
        self.state.gui.current_tab = 0;
    }

    /// Mirror the text fields into the export options.
    pub fn sync_export_options(&mut self) {
        let export = &mut self.state.options.export;
        export.out_dir = PathBuf::from(file::normalize_separators(self.out_dir_text.trim()));
        let font = self.font_text.trim();
        export.pdf_font = if font.is_empty() { None } else { Some(PathBuf::from(font)) };
    }

    pub fn export_all(&mut self) {
        self.sync_export_options();
        let export = self.state.options.export.clone();

        let written = match runner::export_reports(&self.reports, &export) {
            Ok(paths) => paths.len(),
            Err(e) => {
                loge!("{}", e);
                self.status(format!("Export failed: {}", e));
                return;
            }
        };
        self.status(format!("Exported {} file(s) to {}", written, export.out_dir.display()));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::SidePanel::left("files")
            .resizable(false)
            .show(ctx, |ui| {
                components::file_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::tabs::draw(ui, self);

            ui.separator();

            components::report_view::draw(ui, self);
        });
    }
}
