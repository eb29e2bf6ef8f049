//! Icon provider trait
//!
//! Defines the interface that all icon directory providers must implement.

use crate::data::types::IconId;
use crate::error::Result;
use std::collections::HashMap;

use super::types::{CollectionInfo, SearchOptions, SearchResults};

/// A source of vector icons
///
/// Implementations provide search, raw SVG download, and collection
/// listing for a specific icon directory service.
pub trait IconProvider: Send + Sync {
    /// Display name for the provider (e.g., "Iconify")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "iconify")
    fn id(&self) -> &'static str;

    /// Search for icons matching a text query
    fn search(&self, options: &SearchOptions) -> Result<SearchResults>;

    /// Download the raw SVG markup for one icon
    fn fetch_svg(&self, icon: &IconId) -> Result<String>;

    /// List the available icon collections, keyed by prefix
    fn collections(&self) -> Result<HashMap<String, CollectionInfo>>;

    /// Cancel any in-flight search so its result is discarded
    fn cancel_pending(&self) {}
}
