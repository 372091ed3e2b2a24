/// Screens of the app
///
/// Each screen is a pure projection of the session: it reads state and emits
/// messages, it never mutates anything.
use iced::widget::{column, container, image, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::PhotoRecord;
use crate::Message;

pub mod review;
pub mod theme;
pub mod upload;
pub mod viewer;

pub const TITLE: &str = "Reliable Narrator";

/// Title block shared by every screen
pub fn header<'a>(title_size: u16, subtitle: Option<String>) -> Element<'a, Message> {
    let mut header = column![text(TITLE).size(title_size).color(theme::INK)]
        .spacing(6)
        .align_x(Alignment::Center);

    if let Some(subtitle) = subtitle {
        header = header.push(text(subtitle).size(15).color(theme::INK_SOFT));
    }

    container(header)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([32, 0])
        .into()
}

/// Square thumbnail of a photo, or an empty tile once its handle is released
pub fn thumbnail<'a>(photo: &PhotoRecord, size: f32) -> Element<'a, Message> {
    match photo.image.thumbnail() {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Space::new(Length::Fixed(size), Length::Fixed(size)).into(),
    }
}

/// "1 photo" / "3 photos"
pub fn counted(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

/// "1 photo loaded" / "3 photos loaded"
pub fn photo_count(count: usize) -> String {
    format!("{} loaded", counted(count, "photo"))
}
