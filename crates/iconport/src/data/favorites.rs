//! Favorites management
//!
//! An ordered set of favorite icon identifiers, flushed to disk after
//! every mutation so the file always matches what the UI shows.

use crate::data::storage;
use crate::data::types::IconId;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Favorites data file name
const FAVORITES_FILE: &str = "favorites.json";

/// Favorites file format version for migrations
const FAVORITES_VERSION: u32 = 1;

/// Favorites file structure
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    icons: Vec<IconId>,
}

impl Default for FavoritesFile {
    fn default() -> Self {
        Self {
            version: FAVORITES_VERSION,
            icons: Vec::new(),
        }
    }
}

/// Handle to the persisted favorites set
///
/// Insertion order is preserved; duplicates are rejected.
pub struct Favorites {
    path: PathBuf,
    icons: Vec<IconId>,
}

impl Favorites {
    /// Open (or create empty) favorites at the default storage location
    pub fn open() -> Result<Self> {
        let path = storage::data_path(FAVORITES_FILE)?;
        Self::open_at(path)
    }

    /// Open (or create empty) favorites backed by a specific file
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let icons = match storage::load_from::<FavoritesFile>(&path)? {
            Some(file) => file.icons,
            None => Vec::new(),
        };
        Ok(Self { path, icons })
    }

    fn flush(&self) -> Result<()> {
        let file = FavoritesFile {
            version: FAVORITES_VERSION,
            icons: self.icons.clone(),
        };
        storage::save_to(&self.path, &file)
    }

    /// Check membership
    pub fn contains(&self, id: &IconId) -> bool {
        self.icons.contains(id)
    }

    /// Add an icon; returns false if it was already a favorite
    pub fn add(&mut self, id: &IconId) -> Result<bool> {
        if self.contains(id) {
            return Ok(false);
        }
        self.icons.push(id.clone());
        self.flush()?;
        Ok(true)
    }

    /// Remove an icon; returns false if it was not a favorite
    pub fn remove(&mut self, id: &IconId) -> Result<bool> {
        let before = self.icons.len();
        self.icons.retain(|i| i != id);
        if self.icons.len() == before {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Flip membership; returns true when the icon is now a favorite
    pub fn toggle(&mut self, id: &IconId) -> Result<bool> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// All favorites in insertion order
    pub fn all(&self) -> &[IconId] {
        &self.icons
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether there are no favorites
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
