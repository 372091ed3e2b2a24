use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::{header, photo_count, theme, thumbnail};
use crate::state::Session;
use crate::Message;

const THUMB_SIZE: f32 = 96.0;

/// Thumbnail grid shown between upload and the walkthrough
pub fn view<'a>(session: &'a Session, status: &'a str) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = session
        .photos()
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let open = button(thumbnail(photo, THUMB_SIZE))
                .padding(2)
                .on_press(Message::OpenPhoto(i))
                .style(theme::thumbnail(false));
            let remove = button(text("Remove").size(11))
                .padding([2, 6])
                .on_press(Message::RemovePhoto(photo.id.clone()))
                .style(theme::link);

            column![open, remove].align_x(Alignment::Center).into()
        })
        .collect();

    let grid = Wrap::with_elements(tiles).spacing(10.0).line_spacing(10.0);

    let strip = column![
        text("YOUR WEEK'S PHOTOS").size(12).color(theme::INK_FAINT),
        grid,
        text("Photos are sorted by date. Click any photo to preview it.")
            .size(13)
            .color(theme::INK_FAINT),
    ]
    .spacing(12)
    .width(Length::Fill);

    let actions = row![
        button(text("+ Add more photos").size(14))
            .padding([10, 16])
            .on_press(Message::BrowsePhotos)
            .style(theme::secondary),
        button(text("Start over").size(14))
            .padding([10, 16])
            .on_press(Message::StartOver)
            .style(theme::link),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let ready = container(
        column![
            text("Ready to tell your story?").size(20).color(theme::INK),
            text(
                "We'll walk through each photo together. You talk, I'll listen, \
                 and ask a few questions along the way."
            )
            .size(14)
            .color(theme::INK_SOFT),
            button(text("Let's begin").size(16))
                .padding([14, 32])
                .on_press(Message::BeginWalkthrough)
                .style(theme::primary),
        ]
        .spacing(14)
        .align_x(Alignment::Center),
    )
    .padding([32, 24])
    .width(Length::Fill)
    .style(theme::card);

    column![
        header(28, Some(photo_count(session.len()))),
        strip,
        actions,
        ready,
        text(status).size(12).color(theme::INK_FAINT),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}
