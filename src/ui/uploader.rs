/// Upload affordances
///
/// Both the full drop zone and the compact "+" tile send
/// `Message::PickFiles`; files dropped on the window arrive separately as
/// `Message::FileDropped`. Both paths feed the same import queue.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Background, Border, Color, Element, Length};

use crate::state::settings::MAX_IMAGES;
use crate::Message;

const ACCENT: Color = Color { r: 0.31, g: 0.27, b: 0.9, a: 1.0 };
const MUTED: Color = Color { r: 0.6, g: 0.6, b: 0.65, a: 1.0 };

/// Full drop zone shown while the collage is empty
pub fn drop_zone<'a>(hovering: bool) -> Element<'a, Message> {
    let prompt = column![
        text("⬆").size(40).color(ACCENT),
        text("Drop photos or click to upload").size(24),
        text(format!("PNG, JPG, HEIC up to {} images", MAX_IMAGES))
            .size(14)
            .color(MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let zone = button(container(prompt).center_x(Length::Fill).padding(48))
        .on_press(Message::PickFiles)
        .width(Length::Fixed(560.0))
        .style(move |_theme, _status| button::Style {
            background: Some(Background::Color(if hovering {
                Color { a: 0.08, ..ACCENT }
            } else {
                Color::WHITE
            })),
            text_color: Color::BLACK,
            border: Border {
                radius: 32.0f32.into(),
                width: 2.0,
                color: if hovering { ACCENT } else { MUTED },
            },
            ..button::Style::default()
        });

    column![
        text("Your photos, perfectly arranged.").size(48),
        text(format!("Simple. Professional. Support up to {} photos.", MAX_IMAGES))
            .size(16)
            .color(MUTED),
        zone,
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .into()
}

/// Compact "+" tile shown in the grid while there is room for more
pub fn compact<'a>() -> Element<'a, Message> {
    button(
        container(text("+").size(28).color(MUTED))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::PickFiles)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered => Color { a: 0.06, ..ACCENT },
            _ => Color::TRANSPARENT,
        })),
        text_color: Color::BLACK,
        border: Border {
            radius: 16.0f32.into(),
            width: 2.0,
            color: MUTED,
        },
        ..button::Style::default()
    })
    .into()
}
