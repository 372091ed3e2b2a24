use super::data::{PhotoId, PhotoRecord, ViewState};

/// The Session owns every photo loaded in this run of the app.
///
/// It keeps the collection sorted by capture date, tracks the cursor used by
/// the viewer, and decides which screen is showing. The UI never mutates
/// these directly; every user action goes through one of the transition
/// methods below.
///
/// Invariants:
/// - `photos` is sorted ascending by `captured_at` and has no duplicate ids
/// - `cursor < photos.len()` whenever `photos` is non-empty, else `cursor == 0`
/// - `view == ViewState::Upload` whenever `photos` is empty
#[derive(Debug, Default)]
pub struct Session {
    photos: Vec<PhotoRecord>,
    cursor: usize,
    view: ViewState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch of freshly ingested photos.
    ///
    /// Re-sorts the whole collection by capture date. The sort is stable:
    /// photos with equal timestamps keep the order they were added in.
    /// Adding at least one photo shows the review grid. Returns how many
    /// photos were added.
    pub fn ingest(&mut self, batch: Vec<PhotoRecord>) -> usize {
        let added = batch.len();
        if added == 0 {
            return 0;
        }

        for mut record in batch {
            while self.contains(&record.id) {
                record.id = PhotoId::generate();
            }
            self.photos.push(record);
        }
        self.photos.sort_by_key(|p| p.captured_at);

        self.view = ViewState::Review;
        log::info!("📸 Added {} photos ({} total)", added, self.photos.len());
        added
    }

    /// Remove a photo by id and release its image data.
    ///
    /// Unknown ids are ignored. Returns the removed (already released) record.
    pub fn remove(&mut self, id: &PhotoId) -> Option<PhotoRecord> {
        let index = self.photos.iter().position(|p| &p.id == id)?;
        let mut removed = self.photos.remove(index);
        removed.image.release();

        if self.photos.is_empty() {
            self.cursor = 0;
            self.view = ViewState::Upload;
        } else if self.cursor >= self.photos.len() {
            self.cursor = self.photos.len() - 1;
        }

        log::info!(
            "🗑️  Removed {} [{}] ({} left)",
            removed.display_name,
            removed.id,
            self.photos.len()
        );
        log::debug!("Released image data for {}", removed.source.display());
        Some(removed)
    }

    /// Remove the photo under the cursor
    pub fn remove_current(&mut self) -> Option<PhotoRecord> {
        let id = self.current()?.id.clone();
        self.remove(&id)
    }

    /// Move the cursor to `index`. Out-of-range requests are ignored.
    pub fn navigate(&mut self, index: usize) -> bool {
        if index >= self.photos.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.can_go_next() && self.navigate(self.cursor + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.can_go_previous() && self.navigate(self.cursor - 1)
    }

    pub fn can_go_previous(&self) -> bool {
        self.view == ViewState::Viewer && self.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.view == ViewState::Viewer && self.cursor + 1 < self.photos.len()
    }

    /// Start the walkthrough from the earliest photo
    pub fn enter_viewer(&mut self) -> ViewState {
        if !self.photos.is_empty() {
            self.cursor = 0;
            self.view = ViewState::Viewer;
        }
        self.view
    }

    /// Open the viewer at a tapped thumbnail
    pub fn open_photo(&mut self, index: usize) -> ViewState {
        if self.navigate(index) {
            self.view = ViewState::Viewer;
        }
        self.view
    }

    /// Leave the viewer, keeping the cursor where it was
    pub fn back_to_review(&mut self) -> ViewState {
        if self.view == ViewState::Viewer {
            self.view = ViewState::Review;
        }
        self.view
    }

    /// Drop every photo and go back to the upload screen
    pub fn clear(&mut self) -> ViewState {
        let released = self.release_all();
        if released > 0 {
            log::info!("🧹 Cleared session, released {} photos", released);
        }
        self.photos.clear();
        self.cursor = 0;
        self.view = ViewState::Upload;
        self.view
    }

    /// Release all image data at the end of the session
    pub fn teardown(&mut self) {
        self.clear();
    }

    fn release_all(&mut self) -> usize {
        let mut released = 0;
        for photo in self.photos.iter_mut().filter(|p| !p.image.is_released()) {
            photo.image.release();
            released += 1;
        }
        released
    }

    fn contains(&self, id: &PhotoId) -> bool {
        self.photos.iter().any(|p| &p.id == id)
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Photo under the cursor, if any
    pub fn current(&self) -> Option<&PhotoRecord> {
        self.photos.get(self.cursor)
    }

    /// Fraction of the walkthrough reached, in 0.0..=1.0
    pub fn progress(&self) -> f32 {
        if self.photos.is_empty() {
            return 0.0;
        }
        (self.cursor + 1) as f32 / self.photos.len() as f32
    }

    /// "2 of 5"
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.cursor + 1, self.photos.len())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::handle::ImageHandle;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use iced::widget::image::Handle;
    use std::path::PathBuf;

    fn t(offset_hours: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap() + Duration::hours(offset_hours)
    }

    fn photo(name: &str, captured_at: DateTime<Utc>) -> PhotoRecord {
        let pixel = Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]);
        PhotoRecord::new(
            ImageHandle::new(pixel.clone(), pixel),
            name,
            captured_at,
            PathBuf::from(format!("/photos/{}", name)),
        )
    }

    fn names(session: &Session) -> Vec<&str> {
        session.photos().iter().map(|p| p.display_name.as_str()).collect()
    }

    fn session_with(count: i64) -> Session {
        let mut session = Session::new();
        session.ingest((0..count).map(|i| photo(&format!("p{}", i), t(i))).collect());
        session
    }

    #[test]
    fn test_new_session_is_empty_upload() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.view(), ViewState::Upload);
        assert!(session.current().is_none());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_ingest_sorts_by_capture_date() {
        let mut session = Session::new();
        let added = session.ingest(vec![
            photo("t2", t(2)),
            photo("t1", t(1)),
            photo("t3", t(3)),
        ]);

        assert_eq!(added, 3);
        assert_eq!(names(&session), vec!["t1", "t2", "t3"]);
        assert_eq!(session.view(), ViewState::Review);

        // A later batch interleaves with the existing photos
        session.ingest(vec![photo("t0", t(0)), photo("t2.5", t(2) + Duration::minutes(30))]);
        assert_eq!(names(&session), vec!["t0", "t1", "t2", "t2.5", "t3"]);
        assert!(session
            .photos()
            .windows(2)
            .all(|w| w[0].captured_at <= w[1].captured_at));
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let mut session = Session::new();
        session.ingest(vec![photo("a", t(1)), photo("b", t(1))]);
        session.ingest(vec![photo("c", t(1)), photo("early", t(0))]);

        assert_eq!(names(&session), vec!["early", "a", "b", "c"]);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.ingest(Vec::new()), 0);
        assert_eq!(session.view(), ViewState::Upload);
    }

    #[test]
    fn test_ingest_from_viewer_returns_to_review() {
        let mut session = session_with(2);
        session.enter_viewer();
        session.ingest(vec![photo("late", t(10))]);
        assert_eq!(session.view(), ViewState::Review);
        assert!(session.cursor() < session.len());
    }

    #[test]
    fn test_colliding_ids_are_reissued() {
        let mut session = Session::new();
        let first = photo("first", t(0));
        let mut second = photo("second", t(1));
        second.id = first.id.clone();

        session.ingest(vec![first, second]);

        let ids: std::collections::HashSet<_> = session.photos().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_same_file_twice_gives_two_records() {
        let mut session = Session::new();
        session.ingest(vec![photo("same.jpg", t(0))]);
        session.ingest(vec![photo("same.jpg", t(0))]);

        assert_eq!(session.len(), 2);
        assert_ne!(session.photos()[0].id, session.photos()[1].id);
    }

    #[test]
    fn test_tap_thumbnail_opens_viewer() {
        let mut session = Session::new();
        session.ingest(vec![
            photo("t2", t(2)),
            photo("t1", t(1)),
            photo("t3", t(3)),
        ]);

        assert_eq!(session.open_photo(2), ViewState::Viewer);
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.current().unwrap().display_name, "t3");
    }

    #[test]
    fn test_tap_out_of_range_is_ignored() {
        let mut session = session_with(2);
        assert_eq!(session.open_photo(5), ViewState::Review);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_enter_viewer_resets_cursor() {
        let mut session = session_with(3);
        session.open_photo(2);
        session.back_to_review();
        assert_eq!(session.cursor(), 2);

        assert_eq!(session.enter_viewer(), ViewState::Viewer);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_enter_viewer_on_empty_session_stays_on_upload() {
        let mut session = Session::new();
        assert_eq!(session.enter_viewer(), ViewState::Upload);
    }

    #[test]
    fn test_back_keeps_cursor() {
        let mut session = session_with(3);
        session.open_photo(1);
        assert_eq!(session.back_to_review(), ViewState::Review);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_navigate_out_of_range_never_moves_cursor() {
        let mut session = session_with(3);
        session.open_photo(1);

        assert!(!session.navigate(3));
        assert!(!session.navigate(usize::MAX));
        assert_eq!(session.cursor(), 1);

        assert!(session.navigate(2));
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_nav_buttons_disabled_at_bounds() {
        let mut session = session_with(3);
        session.enter_viewer();

        assert!(!session.can_go_previous());
        assert!(session.can_go_next());
        assert!(!session.previous());
        assert_eq!(session.cursor(), 0);

        assert!(session.next());
        assert!(session.next());
        assert_eq!(session.cursor(), 2);
        assert!(session.can_go_previous());
        assert!(!session.can_go_next());
        assert!(!session.next());
        assert_eq!(session.cursor(), 2);

        assert!(session.previous());
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_nav_disabled_outside_viewer() {
        let session = session_with(3);
        assert_eq!(session.view(), ViewState::Review);
        assert!(!session.can_go_next());
        assert!(!session.can_go_previous());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut session = session_with(2);
        session.open_photo(1);

        assert!(session.remove(&PhotoId::generate()).is_none());
        assert_eq!(session.len(), 2);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.view(), ViewState::Viewer);
    }

    #[test]
    fn test_remove_last_clamps_cursor() {
        let mut session = session_with(3);
        session.open_photo(2);

        let removed = session.remove_current().unwrap();
        assert_eq!(removed.display_name, "p2");
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.view(), ViewState::Viewer);
        assert_eq!(session.current().unwrap().display_name, "p1");
    }

    #[test]
    fn test_remove_before_cursor_keeps_index() {
        let mut session = session_with(3);
        session.open_photo(1);
        let first = session.photos()[0].id.clone();

        session.remove(&first);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.current().unwrap().display_name, "p2");
    }

    #[test]
    fn test_remove_only_photo_returns_to_upload() {
        let mut session = session_with(1);
        session.enter_viewer();

        session.remove_current();
        assert!(session.is_empty());
        assert_eq!(session.view(), ViewState::Upload);
        assert_eq!(session.cursor(), 0);
        assert!(session.remove_current().is_none());
    }

    #[test]
    fn test_removed_photo_is_released() {
        let mut session = session_with(2);
        let id = session.photos()[0].id.clone();

        let removed = session.remove(&id).unwrap();
        assert!(removed.image.is_released());
        assert!(!session.photos()[0].image.is_released());
    }

    #[test]
    fn test_clear_returns_to_upload() {
        let mut session = session_with(3);
        session.open_photo(2);

        assert_eq!(session.clear(), ViewState::Upload);
        assert!(session.is_empty());
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_release_all_releases_every_handle_once() {
        let mut session = session_with(3);

        assert_eq!(session.release_all(), 3);
        assert!(session.photos().iter().all(|p| p.image.is_released()));
        assert_eq!(session.release_all(), 0);
    }

    #[test]
    fn test_teardown_empties_session() {
        let mut session = session_with(2);
        session.teardown();
        assert!(session.is_empty());
        assert_eq!(session.view(), ViewState::Upload);
    }

    #[test]
    fn test_progress_and_label() {
        let mut session = session_with(4);
        session.enter_viewer();
        assert_eq!(session.position_label(), "1 of 4");
        assert_eq!(session.progress(), 0.25);

        session.navigate(3);
        assert_eq!(session.position_label(), "4 of 4");
        assert_eq!(session.progress(), 1.0);
    }
}
