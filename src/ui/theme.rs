/// Warm, analog-journal palette and the widget styles built on it
use iced::theme::Palette;
use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const BG: Color = rgb(0.969, 0.953, 0.929);
pub const BG_DEEP: Color = rgb(0.929, 0.906, 0.867);
pub const CARD: Color = rgb(1.0, 0.988, 0.969);
pub const INK: Color = rgb(0.173, 0.145, 0.125);
pub const INK_SOFT: Color = rgb(0.420, 0.369, 0.322);
pub const INK_FAINT: Color = rgb(0.659, 0.604, 0.549);
pub const ACCENT: Color = rgb(0.769, 0.439, 0.294);
pub const ACCENT_GLOW: Color = Color { r: 0.769, g: 0.439, b: 0.294, a: 0.12 };
pub const BORDER: Color = rgb(0.867, 0.835, 0.792);
const SHADOW: Color = Color { r: 0.173, g: 0.145, b: 0.125, a: 0.08 };

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

pub fn theme() -> Theme {
    Theme::custom(
        "Reliable Narrator".to_string(),
        Palette {
            background: BG,
            text: INK,
            primary: ACCENT,
            success: rgb(0.420, 0.557, 0.376),
            danger: rgb(0.741, 0.278, 0.231),
        },
    )
}

fn soft_shadow() -> Shadow {
    Shadow {
        color: SHADOW,
        offset: Vector::new(0.0, 4.0),
        blur_radius: 16.0,
    }
}

/// Rounded card used for the photo, the ready prompt and the drop zone
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 20.0.into(),
        },
        shadow: soft_shadow(),
        ..container::Style::default()
    }
}

/// Dashed-look drop zone, highlighted while files hover the window
pub fn drop_zone(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let highlighted = active || matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(if highlighted { ACCENT_GLOW } else { CARD })),
            text_color: INK,
            border: Border {
                color: if highlighted { ACCENT } else { BORDER },
                width: 2.0,
                radius: 20.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Filled accent button ("Let's begin")
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => rgb(0.831, 0.584, 0.435),
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 14.0.into(),
            ..Border::default()
        },
        shadow: soft_shadow(),
    }
}

/// Outlined button; dimmed when disabled (prev/next at the bounds)
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Disabled => Color { a: 0.35, ..INK },
        _ => INK,
    };
    button::Style {
        background: Some(Background::Color(CARD)),
        text_color,
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 14.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Plain text button ("← Back to all photos")
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => ACCENT,
            _ => INK_SOFT,
        },
        ..button::Style::default()
    }
}

/// Border around a thumbnail; accent when it is the current photo
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: None,
        text_color: INK,
        border: Border {
            color: if active { ACCENT } else { Color::TRANSPARENT },
            width: 2.0,
            radius: 12.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Thin walkthrough progress bar
pub fn progress(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(BG_DEEP),
        bar: Background::Color(ACCENT),
        border: Border {
            radius: 2.0.into(),
            ..Border::default()
        },
    }
}

/// Round translucent "×" over the photo
pub fn remove(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color { a: 0.45, ..INK })),
        text_color: Color::WHITE,
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}
