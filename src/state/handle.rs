use iced::widget::image::Handle;

/// Revocable reference to the renderable pixels of one photo.
///
/// Holds the full-size image and a thumbnail. Both are iced image handles,
/// which keep decoded data alive for as long as a handle exists, so the
/// session calls [`ImageHandle::release`] whenever a photo leaves the
/// collection. A released handle renders nothing.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    full: Option<Handle>,
    thumbnail: Option<Handle>,
}

impl ImageHandle {
    pub fn new(full: Handle, thumbnail: Handle) -> Self {
        Self {
            full: Some(full),
            thumbnail: Some(thumbnail),
        }
    }

    pub fn full(&self) -> Option<&Handle> {
        self.full.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&Handle> {
        self.thumbnail.as_ref()
    }

    /// Drop the underlying image data.
    ///
    /// Returns `false` if the handle had already been released.
    pub fn release(&mut self) -> bool {
        let had_data = self.full.is_some() || self.thumbnail.is_some();
        self.full = None;
        self.thumbnail = None;
        had_data
    }

    pub fn is_released(&self) -> bool {
        self.full.is_none() && self.thumbnail.is_none()
    }
}
