//! Icon export pipeline
//!
//! Fetch, normalize, color, rasterize, and write icons to disk, one at a
//! time or in batches.

pub mod batch;
pub mod color;
pub mod normalize;
pub mod raster;
pub mod service;

// Re-export the pipeline surface
pub use batch::BatchReport;
pub use color::substitute_color;
pub use normalize::normalize_svg;
pub use raster::render_png;
pub use service::{ExportOptions, ExportService, SavePrompt};
