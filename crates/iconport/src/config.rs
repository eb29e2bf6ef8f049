//! Configuration constants for iconport services

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "iconport";
}

/// Icon directory API configuration
pub mod api {
    /// Default Iconify API server
    pub const ICONIFY_DEFAULT_SERVER: &str = "https://api.iconify.design";

    /// Default search result limit
    pub const DEFAULT_SEARCH_LIMIT: usize = 64;

    /// How long a cached search result counts as fresh
    pub const SEARCH_CACHE_TTL_SECS: u64 = 7 * 60;

    /// Maximum number of cached search result pages
    pub const SEARCH_CACHE_MAX_ENTRIES: usize = 64;

    /// Maximum number of remembered search queries
    pub const MAX_RECENT_SEARCHES: usize = 10;
}

/// Network configuration
pub mod network {
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("iconport/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Export pipeline configuration
pub mod export {
    /// PNG sizes the export UI offers
    pub const PNG_SIZES: &[u32] = &[64, 128, 256, 512, 1024];

    /// Default PNG size
    pub const DEFAULT_PNG_SIZE: u32 = 128;

    /// Default export color
    pub const DEFAULT_COLOR: &str = "#000000";

    /// Pixel size assumed for SVGs that carry no viewBox
    pub const FALLBACK_DIMENSION: &str = "24";

    /// Delay between batch items, to stay friendly to the remote API
    pub const BATCH_DELAY_MS: u64 = 300;

    /// Subfolder of the user's download directory used as the initial
    /// default export folder
    pub const DEFAULT_EXPORT_SUBDIR: &str = "iconport";
}
