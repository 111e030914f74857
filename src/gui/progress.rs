// src/gui/progress.rs
use std::path::PathBuf;
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, name: &str, _written: &[PathBuf]) {
        self.done += 1;
        self.set_status(format!("Processed {} ({}/{})", name, self.done, self.total));
    }
    fn item_failed(&mut self, name: &str, error: &str) {
        self.failed += 1;
        self.set_status(format!("Failed {}: {}", name, error));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status(format!("Processing complete ({}/{})", self.done, self.total));
        } else {
            self.set_status(format!(
                "Processing complete ({}/{}, {} failed, see .store/debug.log)",
                self.done, self.total, self.failed
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tracks_counts() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(Arc::clone(&status));
        p.begin(2);
        p.item_done("data1.html", &[]);
        assert_eq!(*status.lock().unwrap(), "Processed data1.html (1/2)");
        p.item_failed("data2.html", "cannot read");
        p.finish();
        assert_eq!(
            *status.lock().unwrap(),
            "Processing complete (1/2, 1 failed, see .store/debug.log)"
        );
    }
}
