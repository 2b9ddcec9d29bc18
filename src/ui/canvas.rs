use iced::widget::{
    button, canvas, column, container, image, mouse_area, row, text, text_input, Space, Stack,
};
use iced::{mouse, Alignment, Background, Border, Color, ContentFit, Element, Length, Padding};

use crate::layout::{parse_hex_color, CanvasSize, Cell, GridPlan, RenderStyle};
use crate::state::data::{CollageImage, LayerRef, StickerLayer, TextLayer};
use crate::state::document::Document;
use crate::state::edit::TextEdit;
use crate::state::filter::FilterPreset;
use crate::state::reorder::ReorderController;
use crate::ui::corners::CornerMask;
use crate::ui::uploader;
use crate::Message;

/// Longest side of the on-screen canvas
pub const CANVAS_MAX_SIDE: f32 = 640.0;

const STICKER_SIZE: f32 = 48.0;
const ACCENT: Color = Color { r: 0.31, g: 0.27, b: 0.9, a: 1.0 };

/// Id of the text input shown while a text layer is being edited
pub fn edit_input_id() -> text_input::Id {
    text_input::Id::new("layer-edit")
}

/// Canvas size for the document's current aspect ratio
pub fn canvas_size(document: &Document) -> CanvasSize {
    CanvasSize::fit(document.settings().aspect_ratio, CANVAS_MAX_SIDE)
}

/// The collage: image grid with text and sticker layers on top
pub fn view<'a>(
    document: &'a Document,
    reorder: &'a ReorderController,
    editing: Option<&'a TextEdit>,
) -> Element<'a, Message> {
    let size = canvas_size(document);
    let style = RenderStyle::from_settings(document.settings());

    let mut layers: Vec<Element<'a, Message>> = vec![grid(document, reorder, style)];
    layers.extend(document.texts().iter().map(|layer| {
        let edit = editing.filter(|edit| edit.id == layer.id);
        positioned(text_layer(layer, edit), size, layer.x, layer.y)
    }));
    layers.extend(
        document
            .stickers()
            .iter()
            .map(|sticker| positioned(sticker_layer(sticker), size, sticker.x, sticker.y)),
    );

    let surface = Stack::with_children(layers)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    let framed = container(mouse_area(surface).on_move(Message::CanvasPointerMoved))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(style.background)),
            border: Border { radius: 24.0f32.into(), ..Border::default() },
            ..container::Style::default()
        });

    column![
        framed,
        text(format!("{} / {} PHOTOS", document.images().len(), crate::state::settings::MAX_IMAGES))
            .size(12),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn grid<'a>(
    document: &'a Document,
    reorder: &'a ReorderController,
    style: RenderStyle,
) -> Element<'a, Message> {
    let plan = GridPlan::new(document.images().len(), document.is_full());
    let columns = plan.columns;

    let rows = plan.rows.into_iter().map(|cells| {
        let mut cells: Vec<Element<'a, Message>> = cells
            .into_iter()
            .map(|cell| match cell {
                Cell::Image(index) => tile(document, &document.images()[index], reorder, style),
                Cell::AddMore => uploader::compact(),
            })
            .collect();
        // Keep every column the same width on a short last row
        while cells.len() < columns {
            cells.push(Space::new(Length::Fill, Length::Fill).into());
        }
        row(cells).spacing(style.spacing).height(Length::Fill).into()
    });

    column(rows)
        .spacing(style.spacing)
        .padding(style.spacing)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile<'a>(
    document: &'a Document,
    img: &'a CollageImage,
    reorder: &'a ReorderController,
    style: RenderStyle,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match document.display().handle(&img.url) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text(&img.source.name).size(12))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let badge: Element<'a, Message> = match img
        .filter
        .as_deref()
        .and_then(FilterPreset::from_descriptor)
        .filter(|preset| !preset.is_identity())
    {
        Some(preset) => container(text(preset.name()).size(10))
            .padding([2, 6])
            .style(container::rounded_box)
            .into(),
        None => Space::new(Length::Shrink, Length::Shrink).into(),
    };

    let remove = button(text("✕").size(12))
        .on_press(Message::RemoveImage(img.id.clone()))
        .padding(4)
        .style(button::danger);

    let controls = container(row![badge, Space::with_width(Length::Fill), remove].align_y(Alignment::Start))
        .padding(6)
        .width(Length::Fill)
        .height(Length::Fill);

    let dragged = reorder.is_dragging(&img.id);
    let radius = style.radius;
    let highlight = container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            border: Border {
                radius: radius.into(),
                width: if dragged { 4.0 } else { 0.0 },
                color: ACCENT,
            },
            ..container::Style::default()
        });

    // Image first, then everything that must show on top of it
    let layers: Vec<Element<'a, Message>> = vec![
        picture,
        canvas(CornerMask::new(radius, style.background))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        highlight.into(),
        controls.into(),
    ];
    let cell = container(Stack::with_children(layers))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.95, 0.95, 0.96))),
            ..container::Style::default()
        });

    mouse_area(cell)
        .on_press(Message::TilePressed(img.id.clone()))
        .on_release(Message::TileReleased(img.id.clone()))
        .interaction(if dragged { mouse::Interaction::Grabbing } else { mouse::Interaction::Grab })
        .into()
}

fn text_layer<'a>(layer: &'a TextLayer, edit: Option<&'a TextEdit>) -> Element<'a, Message> {
    if let Some(edit) = edit {
        return text_input("", &edit.draft)
            .id(edit_input_id())
            .on_input(Message::EditInput)
            .on_submit(Message::EditCommit)
            .size(layer.font_size)
            .width(Length::Fixed(320.0))
            .into();
    }

    let color = parse_hex_color(&layer.color).unwrap_or(Color::BLACK);
    let label = container(text(&layer.text).size(layer.font_size).color(color))
        .padding(8)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.2))),
            border: Border { radius: 8.0f32.into(), ..Border::default() },
            ..container::Style::default()
        });

    mouse_area(label)
        .on_press(Message::LayerPressed(LayerRef::Text(layer.id.clone())))
        .interaction(mouse::Interaction::Grab)
        .into()
}

fn sticker_layer(sticker: &StickerLayer) -> Element<'_, Message> {
    mouse_area(text(&sticker.emoji).size(STICKER_SIZE))
        .on_press(Message::LayerPressed(LayerRef::Sticker(sticker.id.clone())))
        .interaction(mouse::Interaction::Grab)
        .into()
}

/// Place a layer with its top-left corner at (x%, y%) of the canvas
fn positioned<'a>(content: Element<'a, Message>, size: CanvasSize, x: f32, y: f32) -> Element<'a, Message> {
    let origin = size.from_percent(x, y);
    container(content)
        .padding(Padding {
            top: origin.y,
            right: 0.0,
            bottom: 0.0,
            left: origin.x,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
