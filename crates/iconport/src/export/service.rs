//! Export orchestration
//!
//! Sequences one icon export: resolve options, fetch, normalize,
//! substitute color, resolve the destination path, and write. The write
//! is the final step, so a failure anywhere earlier leaves no file
//! behind.

use crate::config::export::BATCH_DELAY_MS;
use crate::data::settings::{is_hex_color, is_supported_size, ExportFormat, ExportSettings};
use crate::data::types::IconId;
use crate::error::{AppError, Result};
use crate::export::color::substitute_color;
use crate::export::normalize::normalize_svg;
use crate::export::raster::render_png;
use crate::providers::IconProvider;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Interactive destination chooser (a native save dialog in the real UI)
///
/// Returns the chosen path, or `None` when the user dismissed the
/// dialog.
pub trait SavePrompt: Send + Sync {
    fn pick_save_path(&self, suggested: &Path, extension: &str) -> Option<PathBuf>;
}

/// Per-call overrides of the persisted export settings
///
/// Unset fields fall back to [`ExportSettings`]; nothing here is ever
/// persisted.
#[derive(Debug, Default, Clone)]
pub struct ExportOptions {
    pub format: Option<ExportFormat>,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub file_name: Option<String>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: ExportFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

/// Fully resolved options for one export call
pub(crate) struct ResolvedOptions {
    pub format: ExportFormat,
    pub size: u32,
    pub color: String,
    pub file_name: String,
}

pub(crate) fn resolve_options(
    options: &ExportOptions,
    settings: &ExportSettings,
    icon: &IconId,
) -> Result<ResolvedOptions> {
    let format = options.format.unwrap_or(settings.format);
    let size = options.size.unwrap_or(settings.size);
    let color = options
        .color
        .clone()
        .unwrap_or_else(|| settings.color.clone());
    let file_name = options
        .file_name
        .clone()
        .unwrap_or_else(|| icon.file_stem());

    if format == ExportFormat::Png && !is_supported_size(size) {
        return Err(AppError::Config(format!(
            "Unsupported PNG size {}: expected one of {:?}",
            size,
            crate::config::export::PNG_SIZES
        )));
    }
    if !is_hex_color(&color) {
        return Err(AppError::Config(format!(
            "Invalid color '{}': expected '#rgb' or '#rrggbb'",
            color
        )));
    }

    Ok(ResolvedOptions {
        format,
        size,
        color,
        file_name,
    })
}

/// Export pipeline entry point
///
/// Holds the injected icon provider and save prompt; constructed once at
/// startup and shared by the UI.
pub struct ExportService {
    provider: Box<dyn IconProvider>,
    prompt: Box<dyn SavePrompt>,
    settings_path: PathBuf,
    batch_delay: Duration,
}

impl ExportService {
    /// Create a service persisting settings at the default location
    pub fn new(provider: Box<dyn IconProvider>, prompt: Box<dyn SavePrompt>) -> Result<Self> {
        let settings_path = ExportSettings::default_path()?;
        Ok(Self::with_settings_path(provider, prompt, settings_path))
    }

    /// Create a service with a custom settings file (for testing)
    pub fn with_settings_path(
        provider: Box<dyn IconProvider>,
        prompt: Box<dyn SavePrompt>,
        settings_path: PathBuf,
    ) -> Self {
        Self {
            provider,
            prompt,
            settings_path,
            batch_delay: Duration::from_millis(BATCH_DELAY_MS),
        }
    }

    /// Override the inter-item batch delay (tests use zero)
    pub fn set_batch_delay(&mut self, delay: Duration) {
        self.batch_delay = delay;
    }

    pub(crate) fn batch_delay(&self) -> Duration {
        self.batch_delay
    }

    /// Path of the settings file this service reads and writes
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// The injected icon provider
    pub fn provider(&self) -> &dyn IconProvider {
        self.provider.as_ref()
    }

    /// Current persisted settings (defaults if none saved yet)
    pub fn settings(&self) -> Result<ExportSettings> {
        ExportSettings::load_from(&self.settings_path)
    }

    /// Export one icon, returning the path that was written
    ///
    /// Every step is a hard dependency on the previous one; see the
    /// module docs for the ordering. A dismissed save dialog surfaces as
    /// [`AppError::Cancelled`], which callers treat as a quiet no-op.
    pub fn export_icon(&self, icon: &IconId, options: &ExportOptions) -> Result<PathBuf> {
        let settings = self.settings()?;
        let resolved = resolve_options(options, &settings, icon)?;

        let svg = self.provider.fetch_svg(icon)?;
        let svg = normalize_svg(&svg);
        let svg = substitute_color(&svg, &resolved.color);

        let path = self.resolve_destination(&settings, &resolved)?;

        let bytes = match resolved.format {
            ExportFormat::Svg => svg.into_bytes(),
            ExportFormat::Png => render_png(&svg, resolved.size)?,
        };

        fs::write(&path, &bytes)?;
        Ok(path)
    }

    fn resolve_destination(
        &self,
        settings: &ExportSettings,
        resolved: &ResolvedOptions,
    ) -> Result<PathBuf> {
        let file_name = format!("{}.{}", resolved.file_name, resolved.format.extension());

        if settings.auto_save && settings.has_default_folder() {
            return Ok(Path::new(&settings.default_folder).join(file_name));
        }

        let suggested = if settings.has_default_folder() {
            Path::new(&settings.default_folder).join(&file_name)
        } else {
            PathBuf::from(&file_name)
        };

        self.prompt
            .pick_save_path(&suggested, resolved.format.extension())
            .ok_or(AppError::Cancelled)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Stub collaborators shared by the export tests

    use super::*;
    use crate::providers::types::{CollectionInfo, SearchOptions, SearchResults};
    use std::collections::HashMap;

    /// Raw SVG as the icon service would return it: relative units plus
    /// the currentColor sentinel
    pub const RAW_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24"><rect x="4" y="4" width="16" height="16" fill="currentColor"/></svg>"##;

    /// Provider serving [`RAW_SVG`] for icons named "home", errors
    /// otherwise
    pub struct StubProvider;

    impl IconProvider for StubProvider {
        fn name(&self) -> &'static str {
            "Stub"
        }

        fn id(&self) -> &'static str {
            "stub"
        }

        fn search(&self, _options: &SearchOptions) -> Result<SearchResults> {
            Ok(SearchResults::empty())
        }

        fn fetch_svg(&self, icon: &IconId) -> Result<String> {
            if icon.name() == "home" || icon.name() == "user" {
                Ok(RAW_SVG.to_string())
            } else {
                Err(AppError::Config(format!("Icon not found: {}", icon)))
            }
        }

        fn collections(&self) -> Result<HashMap<String, CollectionInfo>> {
            Ok(HashMap::new())
        }
    }

    /// Prompt that accepts whatever path was suggested
    pub struct AcceptPrompt;

    impl SavePrompt for AcceptPrompt {
        fn pick_save_path(&self, suggested: &Path, _extension: &str) -> Option<PathBuf> {
            Some(suggested.to_path_buf())
        }
    }

    /// Prompt that always cancels
    pub struct CancelPrompt;

    impl SavePrompt for CancelPrompt {
        fn pick_save_path(&self, _suggested: &Path, _extension: &str) -> Option<PathBuf> {
            None
        }
    }

    /// Prompt that fails the test if it is ever consulted
    pub struct PanicPrompt;

    impl SavePrompt for PanicPrompt {
        fn pick_save_path(&self, _suggested: &Path, _extension: &str) -> Option<PathBuf> {
            panic!("save prompt must not be shown in auto-save mode");
        }
    }
}
