/// Photo ingestion module
///
/// This module handles:
/// - Turning picked/dropped paths into candidate files
/// - Filtering out anything that is not an image
/// - Generating in-memory thumbnails
/// - Building photo records on a background worker

pub mod candidate;
pub mod loader;
pub mod thumbnail;

pub use candidate::IMAGE_EXTENSIONS;
pub use loader::{load_photos, IngestBatch};
