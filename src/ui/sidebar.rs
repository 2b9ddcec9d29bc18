use iced::widget::{button, column, container, row, slider, text, Column};
use iced::{Alignment, Background, Border, Color, Element, Length};
use iced_aw::Wrap;

use crate::state::data::Tab;
use crate::state::filter::FilterPreset;
use crate::state::settings::{
    CollageSettings, SettingsChange, ASPECT_PRESETS, RADIUS_RANGE, SPACING_RANGE,
};
use crate::Message;

/// Glyphs offered in the sticker tab
pub const STICKERS: [&str; 12] = [
    "✨", "💖", "🔥", "🎨", "✌️", "🌈", "🥳", "📍", "💭", "⭐", "🎈", "📷",
];

/// Canvas background swatches in the layout tab
pub const BACKGROUNDS: [&str; 4] = ["#ffffff", "#000000", "#f5f0e8", "#1e1b4b"];

const SIDEBAR_WIDTH: f32 = 300.0;

/// Tab bar for switching the sidebar panel
pub fn tab_bar<'a>(active: Tab) -> Element<'a, Message> {
    let tabs = Tab::ALL.into_iter().map(|tab| {
        button(text(tab.label()).size(14))
            .on_press(Message::TabSelected(tab))
            .padding([10, 16])
            .style(if tab == active { button::primary } else { button::text })
            .into()
    });

    container(row(tabs).spacing(4))
        .padding(6)
        .style(container::rounded_box)
        .into()
}

/// Settings panel for the active tab
pub fn view<'a>(active: Tab, settings: &'a CollageSettings) -> Element<'a, Message> {
    let panel = match active {
        Tab::Layout => layout_panel(settings),
        Tab::Filter => filter_panel(),
        Tab::Text => text_panel(),
        Tab::Sticker => sticker_panel(),
    };

    container(panel)
        .padding(24)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .into()
}

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label.to_uppercase()).size(11).into()
}

/// Pad a palette entry so wrapped rows keep a gap between items
fn spaced<'a>(element: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(element).padding(4).into()
}

fn layout_panel(settings: &CollageSettings) -> Column<'_, Message> {
    let ratios: Vec<Element<'_, Message>> = ASPECT_PRESETS
        .into_iter()
        .map(|ratio| {
            spaced(
                button(text(ratio.to_string()).size(12))
                    .on_press(Message::SettingChanged(SettingsChange::AspectRatio(ratio)))
                    .padding([10, 18])
                    .style(if settings.aspect_ratio == ratio {
                        button::primary
                    } else {
                        button::secondary
                    }),
            )
        })
        .collect();

    let swatches: Vec<Element<'_, Message>> = BACKGROUNDS
        .into_iter()
        .map(|hex| {
            let color = crate::layout::parse_hex_color(hex).unwrap_or(Color::WHITE);
            let selected = settings.background_color == hex;
            spaced(
                button(text(""))
                    .on_press(Message::SettingChanged(SettingsChange::BackgroundColor(
                        hex.to_string(),
                    )))
                    .width(Length::Fixed(32.0))
                    .height(Length::Fixed(32.0))
                    .style(move |_theme, _status| button::Style {
                        background: Some(Background::Color(color)),
                        border: Border {
                            radius: 16.0f32.into(),
                            width: if selected { 3.0 } else { 1.0 },
                            color: Color::from_rgb(0.31, 0.27, 0.9),
                        },
                        ..button::Style::default()
                    }),
            )
        })
        .collect();

    column![
        heading("Aspect Ratio"),
        Wrap::with_elements(ratios),
        heading("Geometry"),
        row![
            text("Gutter").size(12),
            text(format!("{}px", settings.spacing)).size(12),
        ]
        .spacing(8),
        slider(SPACING_RANGE, settings.spacing, |value| {
            Message::SettingChanged(SettingsChange::Spacing(value))
        }),
        row![
            text("Radius").size(12),
            text(format!("{}px", settings.border_radius)).size(12),
        ]
        .spacing(8),
        slider(RADIUS_RANGE, settings.border_radius, |value| {
            Message::SettingChanged(SettingsChange::BorderRadius(value))
        }),
        heading("Background"),
        Wrap::with_elements(swatches),
        button(text("Reset Layout").size(12))
            .on_press(Message::ResetLayout)
            .padding([8, 14])
            .style(button::secondary),
    ]
    .spacing(14)
}

fn filter_panel<'a>() -> Column<'a, Message> {
    let presets: Vec<Element<'a, Message>> = FilterPreset::ALL
        .into_iter()
        .map(|preset| {
            spaced(
                button(text(preset.name().to_uppercase()).size(11))
                    .on_press(Message::ApplyFilter(preset))
                    .width(Length::Fixed(110.0))
                    .padding([18, 12])
                    .style(button::secondary),
            )
        })
        .collect();

    column![
        heading("Photo Filters"),
        text("Applies to every photo").size(12),
        Wrap::with_elements(presets),
    ]
    .spacing(14)
}

fn text_panel<'a>() -> Column<'a, Message> {
    column![
        button(text("Add Text").size(16))
            .on_press(Message::AddText)
            .width(Length::Fill)
            .padding(14)
            .style(button::primary),
        text("Double click text on canvas to modify content").size(11),
        text("Drag text to move it").size(11),
    ]
    .spacing(14)
    .align_x(Alignment::Center)
}

fn sticker_panel<'a>() -> Column<'a, Message> {
    let glyphs: Vec<Element<'a, Message>> = STICKERS
        .into_iter()
        .map(|emoji| {
            spaced(
                button(text(emoji).size(32))
                    .on_press(Message::AddSticker(emoji))
                    .style(button::text),
            )
        })
        .collect();

    column![heading("Emoji Stickers"), Wrap::with_elements(glyphs)].spacing(14)
}
