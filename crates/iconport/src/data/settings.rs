//! Export settings management
//!
//! The persisted user preferences driving the export pipeline.

use crate::config::export::{
    DEFAULT_COLOR, DEFAULT_EXPORT_SUBDIR, DEFAULT_PNG_SIZE, PNG_SIZES,
};
use crate::data::storage;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Settings data file name
const SETTINGS_FILE: &str = "settings.json";

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Output format for exported icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Svg,
    #[default]
    Png,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            other => Err(AppError::Config(format!(
                "Unknown export format '{}': expected 'svg' or 'png'",
                other
            ))),
        }
    }
}

/// Check whether a PNG size is one of the supported fixed sizes
pub fn is_supported_size(size: u32) -> bool {
    PNG_SIZES.contains(&size)
}

/// Loose shape check for a hex color: `#rgb` or `#rrggbb`
pub fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Persisted export settings
///
/// `size` only matters when `format` is PNG; SVG exports ignore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Folder used for auto-save exports; empty until configured
    #[serde(default)]
    pub default_folder: String,

    /// Output format
    #[serde(default)]
    pub format: ExportFormat,

    /// PNG output size in pixels
    #[serde(default = "default_size")]
    pub size: u32,

    /// Color substituted for the SVG's currentColor sentinel
    #[serde(default = "default_color")]
    pub color: String,

    /// Write to the default folder without prompting
    #[serde(default = "default_true")]
    pub auto_save: bool,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_size() -> u32 {
    DEFAULT_PNG_SIZE
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            default_folder: String::new(),
            format: ExportFormat::default(),
            size: DEFAULT_PNG_SIZE,
            color: DEFAULT_COLOR.to_string(),
            auto_save: true,
        }
    }
}

impl ExportSettings {
    /// Path of the settings file in the default config directory
    pub fn default_path() -> Result<std::path::PathBuf> {
        storage::data_path(SETTINGS_FILE)
    }

    /// Load settings from the default storage location
    ///
    /// A missing file yields the defaults; the record is only written
    /// once something actually changes.
    pub fn load() -> Result<Self> {
        match storage::load::<ExportSettings>(SETTINGS_FILE)? {
            Some(settings) => Ok(settings),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        match storage::load_from::<ExportSettings>(path)? {
            Some(settings) => Ok(settings),
            None => Ok(Self::default()),
        }
    }

    /// Save settings to the default storage location
    pub fn save(&self) -> Result<()> {
        storage::save(SETTINGS_FILE, self)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Whether a default export folder has been configured
    pub fn has_default_folder(&self) -> bool {
        !self.default_folder.trim().is_empty()
    }

    /// Set up the initial default export folder if none is configured
    ///
    /// Creates `{download_dir}/iconport` and stores it. A folder that is
    /// already configured is left untouched. Returns the folder in use.
    pub fn initialize_default_folder(path: &Path) -> Result<String> {
        let mut settings = Self::load_from(path)?;
        if settings.has_default_folder() {
            return Ok(settings.default_folder);
        }

        let download_dir = dirs::download_dir()
            .ok_or_else(|| AppError::Config("Could not determine download directory".to_string()))?;
        let folder = download_dir.join(DEFAULT_EXPORT_SUBDIR);
        fs::create_dir_all(&folder)?;

        let folder = folder
            .to_str()
            .ok_or_else(|| AppError::Config("Download directory path is not valid UTF-8".to_string()))?
            .to_string();

        settings.default_folder = folder.clone();
        settings.save_to(path)?;
        Ok(folder)
    }
}

/// Partial update for settings (only specified fields change)
#[derive(Debug, Default, Clone)]
pub struct SettingsUpdate {
    pub default_folder: Option<String>,
    pub format: Option<ExportFormat>,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub auto_save: Option<bool>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_folder(mut self, folder: impl Into<String>) -> Self {
        self.default_folder = Some(folder.into());
        self
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

    pub fn auto_save(mut self, auto_save: bool) -> Self {
        self.auto_save = Some(auto_save);
        self
    }

    /// Validate and merge this update into existing settings
    pub fn apply_to(self, settings: &mut ExportSettings) -> Result<()> {
        if let Some(size) = self.size {
            if !is_supported_size(size) {
                return Err(AppError::Config(format!(
                    "Unsupported PNG size {}: expected one of {:?}",
                    size, PNG_SIZES
                )));
            }
            settings.size = size;
        }
        if let Some(ref color) = self.color {
            if !is_hex_color(color) {
                return Err(AppError::Config(format!(
                    "Invalid color '{}': expected '#rgb' or '#rrggbb'",
                    color
                )));
            }
            settings.color = color.clone();
        }
        if let Some(folder) = self.default_folder {
            settings.default_folder = folder;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(auto_save) = self.auto_save {
            settings.auto_save = auto_save;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("iconport_settings_test_{}.json", id))
    }

    #[test]
    fn test_default_settings() {
        let settings = ExportSettings::default();
        assert_eq!(settings.default_folder, "");
        assert_eq!(settings.format, ExportFormat::Png);
        assert_eq!(settings.size, 128);
        assert_eq!(settings.color, "#000000");
        assert!(settings.auto_save);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let path = temp_path();
        let settings = ExportSettings::load_from(&path).unwrap();
        assert_eq!(settings, ExportSettings::default());
        // First read must not create the file
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path();

        let mut settings = ExportSettings::default();
        settings.default_folder = "/tmp/icons".to_string();
        settings.format = ExportFormat::Svg;
        settings.size = 512;
        settings.color = "#ff8800".to_string();
        settings.auto_save = false;
        settings.save_to(&path).unwrap();

        let loaded = ExportSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path();
        fs::write(&path, r#"{"format": "svg"}"#).unwrap();

        let settings = ExportSettings::load_from(&path).unwrap();
        assert_eq!(settings.format, ExportFormat::Svg);
        assert_eq!(settings.size, 128);
        assert_eq!(settings.color, "#000000");
        assert!(settings.auto_save);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_format_json_shape() {
        let path = temp_path();

        let mut settings = ExportSettings::default();
        settings.format = ExportFormat::Svg;
        settings.save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"format\": \"svg\""));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("svg".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
        assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert!("jpeg".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Svg.extension(), "svg");
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Png.to_string(), "png");
    }

    #[test]
    fn test_is_supported_size() {
        for &size in PNG_SIZES {
            assert!(is_supported_size(size));
        }
        assert!(!is_supported_size(100));
        assert!(!is_supported_size(0));
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#000000"));
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A1b2C3"));
        assert!(!is_hex_color("000000"));
        assert!(!is_hex_color("#00"));
        assert!(!is_hex_color("#00000g"));
        assert!(!is_hex_color("red"));
    }

    #[test]
    fn test_update_merges_specified_fields() {
        let mut settings = ExportSettings::default();

        SettingsUpdate::new()
            .format(ExportFormat::Svg)
            .color("#123456")
            .apply_to(&mut settings)
            .unwrap();

        assert_eq!(settings.format, ExportFormat::Svg);
        assert_eq!(settings.color, "#123456");
        // Untouched fields keep their values
        assert_eq!(settings.size, 128);
        assert!(settings.auto_save);
    }

    #[test]
    fn test_update_rejects_unsupported_size() {
        let mut settings = ExportSettings::default();
        let result = SettingsUpdate::new().size(100).apply_to(&mut settings);
        assert!(result.is_err());
        assert_eq!(settings.size, 128);
    }

    #[test]
    fn test_update_rejects_bad_color() {
        let mut settings = ExportSettings::default();
        let result = SettingsUpdate::new().color("blue").apply_to(&mut settings);
        assert!(result.is_err());
        assert_eq!(settings.color, "#000000");
    }

    #[test]
    fn test_update_accepts_all_fixed_sizes() {
        let mut settings = ExportSettings::default();
        for &size in PNG_SIZES {
            SettingsUpdate::new().size(size).apply_to(&mut settings).unwrap();
            assert_eq!(settings.size, size);
        }
    }

    #[test]
    fn test_has_default_folder() {
        let mut settings = ExportSettings::default();
        assert!(!settings.has_default_folder());

        settings.default_folder = "   ".to_string();
        assert!(!settings.has_default_folder());

        settings.default_folder = "/tmp/icons".to_string();
        assert!(settings.has_default_folder());
    }

    #[test]
    fn test_initialize_default_folder_respects_existing() {
        let path = temp_path();

        let mut settings = ExportSettings::default();
        settings.default_folder = "/already/configured".to_string();
        settings.save_to(&path).unwrap();

        let folder = ExportSettings::initialize_default_folder(&path).unwrap();
        assert_eq!(folder, "/already/configured");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let path = temp_path();
        fs::write(
            &path,
            r#"{"size": 256, "someFutureField": true, "other": 12}"#,
        )
        .unwrap();

        let settings = ExportSettings::load_from(&path).unwrap();
        assert_eq!(settings.size, 256);

        let _ = fs::remove_file(&path);
    }
}
