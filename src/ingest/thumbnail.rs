use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::Path;

use crate::error::IngestError;

/// Decode an image file and shrink it to fit a `size`×`size` box.
///
/// The result is kept in memory as RGBA pixels; nothing is cached to disk.
pub fn generate_thumbnail(path: &Path, size: u32) -> Result<Handle, IngestError> {
    let img = image::open(path).map_err(|source| IngestError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let thumbnail = img.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let (width, height) = thumbnail.dimensions();

    Ok(Handle::from_rgba(width, height, thumbnail.into_raw()))
}
