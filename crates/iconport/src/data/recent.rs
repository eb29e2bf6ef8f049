//! Recent search history
//!
//! Most-recent-first list of search queries, capped and deduplicated,
//! flushed after every push.

use crate::config::api::MAX_RECENT_SEARCHES;
use crate::data::storage;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Recent searches data file name
const RECENT_SEARCHES_FILE: &str = "recent_searches.json";

/// Recent searches file format version for migrations
const RECENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct RecentSearchesFile {
    version: u32,
    queries: Vec<String>,
}

/// Handle to the persisted search history
pub struct RecentSearches {
    path: PathBuf,
    queries: Vec<String>,
}

impl RecentSearches {
    /// Open (or create empty) history at the default storage location
    pub fn open() -> Result<Self> {
        let path = storage::data_path(RECENT_SEARCHES_FILE)?;
        Self::open_at(path)
    }

    /// Open (or create empty) history backed by a specific file
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let queries = match storage::load_from::<RecentSearchesFile>(&path)? {
            Some(file) => file.queries,
            None => Vec::new(),
        };
        Ok(Self { path, queries })
    }

    /// Record a query as the most recent search
    ///
    /// An existing entry for the same query moves to the front; the list
    /// is trimmed to the configured cap.
    pub fn push(&mut self, query: &str) -> Result<()> {
        self.queries.retain(|q| q != query);
        self.queries.insert(0, query.to_string());
        self.queries.truncate(MAX_RECENT_SEARCHES);

        let file = RecentSearchesFile {
            version: RECENT_VERSION,
            queries: self.queries.clone(),
        };
        storage::save_to(&self.path, &file)
    }

    /// Queries, most recent first
    pub fn all(&self) -> &[String] {
        &self.queries
    }
}
