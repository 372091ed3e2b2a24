/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the ingestion layer and the UI layer.
use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;
use std::path::PathBuf;

use super::handle::ImageHandle;

const ID_SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 6;

/// Unique photo identity: `<unix millis>-<6 base-36 chars>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoId(String);

impl PhotoId {
    /// Generate a fresh id from the current time and a random suffix
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| ID_SUFFIX_ALPHABET[rng.random_range(0..ID_SUFFIX_ALPHABET.len())] as char)
            .collect();

        PhotoId(format!("{}-{}", Utc::now().timestamp_millis(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single photo in the session
#[derive(Debug, Clone)]
pub struct PhotoRecord {
    /// Identity used for removal and list keying
    pub id: PhotoId,
    /// Renderable image data
    pub image: ImageHandle,
    /// Filename only (e.g., "IMG_0001.jpg")
    pub display_name: String,
    /// Last-modified time of the file, or ingestion time if unavailable
    pub captured_at: DateTime<Utc>,
    /// Where the photo was loaded from
    pub source: PathBuf,
}

impl PhotoRecord {
    pub fn new(
        image: ImageHandle,
        display_name: impl Into<String>,
        captured_at: DateTime<Utc>,
        source: PathBuf,
    ) -> Self {
        Self {
            id: PhotoId::generate(),
            image,
            display_name: display_name.into(),
            captured_at,
            source,
        }
    }
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Empty session, waiting for photos
    #[default]
    Upload,
    /// Thumbnail grid before the walkthrough
    Review,
    /// One photo at a time
    Viewer,
}
