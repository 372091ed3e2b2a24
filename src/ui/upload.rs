use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use super::{header, theme};
use crate::Message;

/// Empty-session screen: one big drop zone that also opens the picker
pub fn view<'a>(drag_active: bool, status: &'a str) -> Element<'a, Message> {
    let zone_content = column![
        text("📷").size(28),
        text("Drop your week's photos here").size(17).color(theme::INK),
        text("or click to browse your library").size(13).color(theme::INK_FAINT),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let drop_zone = button(
        container(zone_content)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([48, 24]),
    )
    .on_press(Message::BrowsePhotos)
    .width(Length::Fill)
    .style(theme::drop_zone(drag_active));

    column![
        header(28, Some("Your week, in your words.".to_string())),
        drop_zone,
        text("Your story starts with a photo.")
            .size(14)
            .color(theme::INK_FAINT),
        text(status).size(12).color(theme::INK_FAINT),
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .into()
}
