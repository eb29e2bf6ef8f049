//! Batch export
//!
//! Runs the export pipeline over a list of icons, strictly one at a
//! time, with per-item error isolation: one bad icon never aborts the
//! rest of the run.

use crate::data::settings::ExportSettings;
use crate::data::types::IconId;
use crate::error::{AppError, Result};
use crate::export::service::{ExportOptions, ExportService};
use std::path::{Path, PathBuf};
use std::thread;

/// Outcome of one batch run
#[derive(Debug)]
pub struct BatchReport {
    /// Number of icons written successfully
    pub completed: usize,
    /// One `"prefix:name: message"` entry per failed icon
    pub errors: Vec<String>,
}

impl BatchReport {
    /// Whether every icon exported cleanly
    pub fn all_succeeded(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Forces auto-save on in the persisted settings and restores the prior
/// value when dropped, so the restore happens even if the run bails out
struct AutoSaveGuard {
    path: PathBuf,
    original: bool,
}

impl AutoSaveGuard {
    fn engage(path: &Path) -> Result<Self> {
        let mut settings = ExportSettings::load_from(path)?;
        let original = settings.auto_save;
        settings.auto_save = true;
        settings.save_to(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            original,
        })
    }
}

impl Drop for AutoSaveGuard {
    fn drop(&mut self) {
        match ExportSettings::load_from(&self.path) {
            Ok(mut settings) => {
                settings.auto_save = self.original;
                if let Err(e) = settings.save_to(&self.path) {
                    log::warn!("failed to restore auto-save setting: {}", e);
                }
            }
            Err(e) => log::warn!("failed to restore auto-save setting: {}", e),
        }
    }
}

impl ExportService {
    /// Export a list of icons sequentially
    ///
    /// Preconditions: the list is non-empty and a default export folder
    /// is configured; both fail fast before anything is written.
    ///
    /// Auto-save is forced on for the duration of the run so no dialog
    /// interrupts it, and restored afterwards. Items run strictly one
    /// after another with a short pause between them, out of politeness
    /// to the remote API. `on_progress(current, total)` fires after
    /// every attempt, success or failure.
    pub fn export_batch<F>(&self, icons: &[IconId], mut on_progress: F) -> Result<BatchReport>
    where
        F: FnMut(usize, usize),
    {
        if icons.is_empty() {
            return Err(AppError::Config("No icons to export".to_string()));
        }

        let settings = self.settings()?;
        if !settings.has_default_folder() {
            return Err(AppError::Config(
                "A default export folder must be configured before batch export".to_string(),
            ));
        }

        let _guard = AutoSaveGuard::engage(self.settings_path())?;

        let total = icons.len();
        let mut current = 0;
        let mut errors = Vec::new();

        for (i, icon) in icons.iter().enumerate() {
            if let Err(e) = self.export_icon(icon, &ExportOptions::default()) {
                log::debug!("batch item {} failed: {}", icon, e);
                errors.push(format!("{}: {}", icon, e));
            }

            current += 1;
            on_progress(current, total);

            if i + 1 < total {
                thread::sleep(self.batch_delay());
            }
        }

        Ok(BatchReport {
            completed: current - errors.len(),
            errors,
        })
    }
}
