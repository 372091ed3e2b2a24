use chrono::{DateTime, Local, TimeZone};
use iced::alignment::Horizontal;
use iced::widget::{
    button, column, container, image, progress_bar, row, scrollable, stack, text, Space,
};
use iced::{Alignment, ContentFit, Element, Length};
use std::fmt::Display;

use super::{header, theme, thumbnail};
use crate::state::{PhotoRecord, Session};
use crate::Message;

const PHOTO_MAX_HEIGHT: f32 = 420.0;
const STRIP_THUMB_SIZE: f32 = 64.0;

/// "Monday, Jun 3"
pub fn format_capture_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%A, %b %-d").to_string()
}

/// One photo at a time, with prev/next, a thumbnail strip and the
/// narration placeholder
pub fn view(session: &Session) -> Element<'_, Message> {
    let Some(photo) = session.current() else {
        return Space::new(Length::Fill, Length::Fill).into();
    };

    column![
        header(22, None),
        photo_card(session, photo),
        nav_row(session),
        strip(session),
        narration_placeholder(),
        button(text("← Back to all photos").size(14))
            .on_press(Message::BackToReview)
            .style(theme::link),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

fn photo_card<'a>(session: &'a Session, photo: &'a PhotoRecord) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match photo.image.full() {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PHOTO_MAX_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Space::new(Length::Fill, Length::Fixed(PHOTO_MAX_HEIGHT)).into(),
    };

    let remove = container(
        button(text("×").size(18))
            .padding([4, 11])
            .on_press(Message::RemovePhoto(photo.id.clone()))
            .style(theme::remove),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(12);

    let footer = row![
        text(session.position_label()).size(14).color(theme::INK_SOFT),
        Space::with_width(Length::Fill),
        text(format_capture_date(&photo.captured_at.with_timezone(&Local)))
            .size(13)
            .color(theme::INK_FAINT),
    ]
    .padding([16, 20])
    .align_y(Alignment::Center);

    container(column![stack![picture, remove], footer])
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

fn nav_row(session: &Session) -> Element<'_, Message> {
    let previous = button(text("‹").size(20))
        .padding([8, 18])
        .on_press_maybe(session.can_go_previous().then_some(Message::Previous))
        .style(theme::secondary);
    let next = button(text("›").size(20))
        .padding([8, 18])
        .on_press_maybe(session.can_go_next().then_some(Message::Next))
        .style(theme::secondary);

    row![
        previous,
        progress_bar(0.0..=1.0, session.progress())
            .width(Length::Fixed(200.0))
            .height(Length::Fixed(4.0))
            .style(theme::progress),
        next,
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

fn strip(session: &Session) -> Element<'_, Message> {
    let thumbs = session.photos().iter().enumerate().map(|(i, photo)| {
        button(thumbnail(photo, STRIP_THUMB_SIZE))
            .padding(2)
            .on_press(Message::Navigate(i))
            .style(theme::thumbnail(i == session.cursor()))
            .into()
    });

    scrollable(row(thumbs).spacing(10))
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

// Narration is not built yet
fn narration_placeholder<'a>() -> Element<'a, Message> {
    container(
        column![
            text("\"Tell me about this one...\"").size(15).color(theme::INK_SOFT),
            text("Narration coming in Phase 2").size(13).color(theme::INK_FAINT),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding([24, 24])
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(theme::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_capture_date() {
        let monday = Utc.with_ymd_and_hms(2024, 6, 3, 18, 30, 0).unwrap();
        assert_eq!(format_capture_date(&monday), "Monday, Jun 3");

        let sunday = Utc.with_ymd_and_hms(2024, 12, 29, 8, 0, 0).unwrap();
        assert_eq!(format_capture_date(&sunday), "Sunday, Dec 29");
    }
}
