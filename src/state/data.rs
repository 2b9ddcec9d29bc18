/// Shared data structures for the collage document
///
/// These structs represent the data model that flows between
/// the uploader, the document and the UI layer.

use std::fmt;
use std::path::PathBuf;
use iced::advanced::image::Bytes;
use uuid::Uuid;

use super::display::DisplayUrl;

/// Unique identifier of an image in the collage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

/// Unique identifier of a text or sticker layer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(String);

impl ImageId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl LayerId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user-selected file, read fully into memory
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Filename only (e.g., "IMG_0042.jpg")
    pub name: String,
    /// Where the file was picked or dropped from
    pub path: PathBuf,
    /// Raw file contents, shared with the display handle
    pub bytes: Bytes,
    /// Sniffed MIME type, None when the bytes are not a known image format
    pub mime: Option<&'static str>,
}

/// Represents a single image placed in the collage grid
#[derive(Debug, Clone, PartialEq)]
pub struct CollageImage {
    pub id: ImageId,
    /// Display reference minted from `source`, released when the image is removed
    pub url: DisplayUrl,
    pub source: SourceFile,
    /// Filter descriptor (e.g. "grayscale(100%)"), None until a preset is applied
    pub filter: Option<String>,
}

/// A freely positioned text layer above the grid
///
/// `x` and `y` are percentages of the canvas bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    pub id: LayerId,
    pub text: String,
    /// Hex color, e.g. "#000000"
    pub color: String,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
}

/// An emoji sticker positioned above the grid
#[derive(Debug, Clone, PartialEq)]
pub struct StickerLayer {
    pub id: LayerId,
    pub emoji: String,
    pub x: f32,
    pub y: f32,
}

/// Partial update for a text layer; only `Some` fields are applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPatch {
    pub text: Option<String>,
    pub color: Option<String>,
    pub font_size: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl TextPatch {
    pub fn content(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Self::default() }
    }

    pub fn position(x: f32, y: f32) -> Self {
        Self { x: Some(x), y: Some(y), ..Self::default() }
    }

    pub fn apply(self, layer: &mut TextLayer) {
        if let Some(text) = self.text {
            layer.text = text;
        }
        if let Some(color) = self.color {
            layer.color = color;
        }
        if let Some(font_size) = self.font_size {
            layer.font_size = font_size;
        }
        if let Some(x) = self.x {
            layer.x = x;
        }
        if let Some(y) = self.y {
            layer.y = y;
        }
    }
}

/// Partial update for a sticker layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerPatch {
    pub emoji: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl StickerPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self { x: Some(x), y: Some(y), ..Self::default() }
    }

    pub fn apply(self, layer: &mut StickerLayer) {
        if let Some(emoji) = self.emoji {
            layer.emoji = emoji;
        }
        if let Some(x) = self.x {
            layer.x = x;
        }
        if let Some(y) = self.y {
            layer.y = y;
        }
    }
}

/// Reference to either kind of overlay layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerRef {
    Text(LayerId),
    Sticker(LayerId),
}

/// Sidebar tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Layout,
    Filter,
    Text,
    Sticker,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Layout, Tab::Filter, Tab::Text, Tab::Sticker];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Layout => "Layout",
            Tab::Filter => "Filter",
            Tab::Text => "Text",
            Tab::Sticker => "Sticker",
        }
    }
}
