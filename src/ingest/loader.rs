/// Turn picked or dropped paths into photo records
///
/// Decoding thumbnails is CPU-bound, so the whole batch runs on a blocking
/// worker and comes back to the UI as one message.
use iced::widget::image::Handle;
use std::path::PathBuf;
use tokio::task;

use super::candidate::{expand_paths, CandidateFile};
use super::thumbnail::generate_thumbnail;
use crate::config::Settings;
use crate::error::IngestError;
use crate::state::{ImageHandle, PhotoRecord};

/// Photos built from one pick or drop
#[derive(Debug, Clone, Default)]
pub struct IngestBatch {
    pub records: Vec<PhotoRecord>,
    /// Files that were not images or could not be read
    pub skipped: usize,
}

/// Load every image among `paths` (folders are scanned recursively)
pub async fn load_photos(paths: Vec<PathBuf>, settings: Settings) -> Result<IngestBatch, IngestError> {
    // Spawn blocking because decoding is CPU-intensive
    let batch = task::spawn_blocking(move || load_photos_blocking(&paths, &settings)).await?;
    Ok(batch)
}

/// Blocking implementation of batch loading
fn load_photos_blocking(paths: &[PathBuf], settings: &Settings) -> IngestBatch {
    let mut batch = IngestBatch::default();

    for path in expand_paths(paths, settings.follow_links) {
        let candidate = match CandidateFile::from_path(&path) {
            Ok(candidate) => candidate,
            Err(e) => {
                log::warn!("⚠️  Skipping {}: {}", path.display(), e);
                batch.skipped += 1;
                continue;
            }
        };

        if !candidate.is_image() {
            log::debug!("Not an image, skipping {}", candidate.name);
            batch.skipped += 1;
            continue;
        }

        batch.records.push(build_record(&candidate, settings.thumbnail_size));
    }

    log::info!(
        "📊 Ingest summary: {} photos, {} skipped",
        batch.records.len(),
        batch.skipped
    );
    batch
}

/// Build a photo record for an image candidate.
///
/// A file that cannot be decoded still becomes a photo; it just shows the
/// full image (or nothing) where the thumbnail would be.
pub fn build_record(candidate: &CandidateFile, thumbnail_size: u32) -> PhotoRecord {
    let full = Handle::from_path(&candidate.path);

    let image = match generate_thumbnail(&candidate.path, thumbnail_size) {
        Ok(thumbnail) => ImageHandle::new(full, thumbnail),
        Err(e) => {
            log::warn!("⚠️  {}; using full image as thumbnail", e);
            ImageHandle::new(full.clone(), full)
        }
    };

    PhotoRecord::new(
        image,
        candidate.name.clone(),
        candidate.captured_at(),
        candidate.path.clone(),
    )
}
