/// Collage layout settings
///
/// A single `CollageSettings` value describes the canvas: gutter spacing,
/// corner radius, background color and aspect ratio. It is serialized to
/// JSON for log snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on the number of images in a collage
pub const MAX_IMAGES: usize = 20;

/// Slider range for the gutter between cells (px)
pub const SPACING_RANGE: std::ops::RangeInclusive<u16> = 0..=40;

/// Slider range for cell corner radius (px)
pub const RADIUS_RANGE: std::ops::RangeInclusive<u16> = 0..=120;

/// Aspect ratios offered in the layout tab
pub const ASPECT_PRESETS: [AspectRatio; 5] = [
    AspectRatio::new(1, 1),
    AspectRatio::new(4, 5),
    AspectRatio::new(9, 16),
    AspectRatio::new(3, 4),
    AspectRatio::new(16, 9),
];

/// Canvas aspect ratio, written as "W:H"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRatioError {
    #[error("aspect ratio '{0}' is not of the form W:H")]
    Format(String),
    #[error("aspect ratio '{0}' must have positive sides")]
    Zero(String),
}

impl AspectRatio {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn value(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| ParseRatioError::Format(s.to_string()))?;
        let width: u16 = w.trim().parse().map_err(|_| ParseRatioError::Format(s.to_string()))?;
        let height: u16 = h.trim().parse().map_err(|_| ParseRatioError::Format(s.to_string()))?;
        if width == 0 || height == 0 {
            return Err(ParseRatioError::Zero(s.to_string()));
        }
        Ok(Self { width, height })
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ParseRatioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.to_string()
    }
}

/// All layout settings for the collage canvas
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollageSettings {
    /// Gutter between grid cells in px
    pub spacing: u16,
    /// Cell corner radius in px
    pub border_radius: u16,
    /// Hex color of the canvas background
    pub background_color: String,
    pub aspect_ratio: AspectRatio,
}

impl Default for CollageSettings {
    fn default() -> Self {
        Self {
            spacing: 12,
            border_radius: 12,
            background_color: "#ffffff".to_string(),
            aspect_ratio: AspectRatio::new(1, 1),
        }
    }
}

/// A change to a single settings field
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsChange {
    Spacing(u16),
    BorderRadius(u16),
    BackgroundColor(String),
    AspectRatio(AspectRatio),
}

impl CollageSettings {
    /// Return a copy with one field replaced
    pub fn with(&self, change: SettingsChange) -> Self {
        let mut next = self.clone();
        match change {
            SettingsChange::Spacing(spacing) => next.spacing = spacing,
            SettingsChange::BorderRadius(radius) => next.border_radius = radius,
            SettingsChange::BackgroundColor(color) => next.background_color = color,
            SettingsChange::AspectRatio(ratio) => next.aspect_ratio = ratio,
        }
        next
    }

    /// Convert to JSON string for log snapshots
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
