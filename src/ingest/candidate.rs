/// Candidate files offered by the picker or by a drop
///
/// A candidate is anything the user handed us. Only candidates with an
/// `image/*` media type become photos; the rest are skipped without fuss.
use chrono::{DateTime, Utc};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use crate::error::IngestError;

/// Extensions offered in the file picker filter
pub const IMAGE_EXTENSIONS: [&str; 14] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff",
    "ico", "tga", "avif", "qoi", "pnm", "hdr",
];

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub path: PathBuf,
    /// Filename only
    pub name: String,
    /// MIME type guessed from the extension, if it is a known image format
    pub media_type: Option<&'static str>,
    /// Last-modified time, when the platform reports one
    pub modified: Option<SystemTime>,
}

impl CandidateFile {
    /// Read name, type and modified time for a file on disk
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let metadata = std::fs::metadata(path).map_err(|source| IngestError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(IngestError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            media_type: media_type_for(path),
            modified: metadata.modified().ok(),
        })
    }

    pub fn is_image(&self) -> bool {
        self.media_type
            .is_some_and(|media_type| media_type.starts_with("image/"))
    }

    /// Modified time if known, otherwise now
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.modified
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(Utc::now)
    }
}

/// Guess the media type of a path from its extension
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Replace every directory in `paths` with the files beneath it.
///
/// Files are passed through in order; a directory contributes its files in
/// name order so repeated drops of the same folder behave the same.
pub fn expand_paths(paths: &[PathBuf], follow_links: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        log::debug!("🔍 Scanning folder: {}", path.display());
        for entry in WalkDir::new(path)
            .follow_links(follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }

    files
}
