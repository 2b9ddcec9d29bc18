/// Grid layout for the collage canvas
///
/// Maps an image count to a column count, lays cells out in rows and
/// converts settings into the style the canvas is drawn with.

use iced::{Color, Point};

use crate::state::settings::{AspectRatio, CollageSettings};

/// Number of grid columns for `count` images
pub fn grid_columns(count: usize) -> usize {
    match count {
        1 => 1,
        0..=4 => 2,
        5..=9 => 3,
        10..=16 => 4,
        _ => 5,
    }
}

/// One cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Index into the image list
    Image(usize),
    /// The compact "add more" uploader
    AddMore,
}

/// Cells arranged row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    pub columns: usize,
    pub rows: Vec<Vec<Cell>>,
}

impl GridPlan {
    /// Plan the grid for `count` images. The add-more cell follows the last
    /// image unless the collage is full.
    pub fn new(count: usize, full: bool) -> Self {
        let columns = grid_columns(count);
        let mut cells: Vec<Cell> = (0..count).map(Cell::Image).collect();
        if !full {
            cells.push(Cell::AddMore);
        }

        let rows = cells.chunks(columns).map(<[Cell]>::to_vec).collect();
        Self { columns, rows }
    }
}

/// Canvas dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// Largest canvas with the given ratio that fits in a `max_side` square
    pub fn fit(ratio: AspectRatio, max_side: f32) -> Self {
        let ratio = ratio.value();
        if ratio >= 1.0 {
            Self { width: max_side, height: max_side / ratio }
        } else {
            Self { width: max_side * ratio, height: max_side }
        }
    }

    /// Convert a point inside the canvas to percentages, clamped to 0..=100
    pub fn to_percent(self, point: Point) -> (f32, f32) {
        (
            (point.x / self.width * 100.0).clamp(0.0, 100.0),
            (point.y / self.height * 100.0).clamp(0.0, 100.0),
        )
    }

    /// Convert percentages back to a point inside the canvas
    pub fn from_percent(self, x: f32, y: f32) -> Point {
        Point::new(self.width * x / 100.0, self.height * y / 100.0)
    }
}

/// Style parameters applied uniformly to the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub spacing: f32,
    pub radius: f32,
    pub background: Color,
}

impl RenderStyle {
    pub fn from_settings(settings: &CollageSettings) -> Self {
        Self {
            spacing: settings.spacing as f32,
            radius: settings.border_radius as f32,
            background: parse_hex_color(&settings.background_color).unwrap_or(Color::WHITE),
        }
    }
}

/// Parse "#rgb" or "#rrggbb"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    // from_str_radix alone would also take a sign
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match digits.len() {
        3 => {
            let r = channel(&digits[0..1])?;
            let g = channel(&digits[1..2])?;
            let b = channel(&digits[2..3])?;
            Some(Color::from_rgb8(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::from_rgb8(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::{SettingsChange, MAX_IMAGES};

    #[test]
    fn test_column_breakpoints() {
        let table = [(1, 1), (4, 2), (5, 3), (9, 3), (10, 4), (16, 4), (17, 5), (20, 5)];
        for (count, columns) in table {
            assert_eq!(grid_columns(count), columns, "count {}", count);
        }
        assert_eq!(grid_columns(2), 2);
        assert_eq!(grid_columns(0), 2);
    }

    #[test]
    fn test_plan_with_add_more() {
        let plan = GridPlan::new(5, false);
        assert_eq!(plan.columns, 3);
        assert_eq!(
            plan.rows,
            vec![
                vec![Cell::Image(0), Cell::Image(1), Cell::Image(2)],
                vec![Cell::Image(3), Cell::Image(4), Cell::AddMore],
            ]
        );
    }

    #[test]
    fn test_plan_single_image() {
        let plan = GridPlan::new(1, false);
        assert_eq!(plan.rows, vec![vec![Cell::Image(0)], vec![Cell::AddMore]]);
    }

    #[test]
    fn test_full_plan_has_no_add_more() {
        let plan = GridPlan::new(MAX_IMAGES, true);
        assert_eq!(plan.columns, 5);
        assert_eq!(plan.rows.len(), 4);
        assert!(plan.rows.iter().flatten().all(|cell| *cell != Cell::AddMore));
    }

    #[test]
    fn test_canvas_fit() {
        let wide = CanvasSize::fit(AspectRatio::new(16, 9), 720.0);
        assert_eq!(wide.width, 720.0);
        assert!((wide.height - 405.0).abs() < 1e-3);

        let tall = CanvasSize::fit(AspectRatio::new(4, 5), 720.0);
        assert!((tall.width - 576.0).abs() < 1e-3);
        assert_eq!(tall.height, 720.0);

        let square = CanvasSize::fit(AspectRatio::new(1, 1), 640.0);
        assert_eq!(square, CanvasSize { width: 640.0, height: 640.0 });
    }

    #[test]
    fn test_percent_conversion() {
        let canvas = CanvasSize { width: 400.0, height: 200.0 };
        assert_eq!(canvas.to_percent(Point::new(100.0, 50.0)), (25.0, 25.0));
        assert_eq!(canvas.to_percent(Point::new(-5.0, 500.0)), (0.0, 100.0));
        assert_eq!(canvas.from_percent(50.0, 50.0), Point::new(200.0, 100.0));
    }

    #[test]
    fn test_render_style() {
        let settings = CollageSettings::default()
            .with(SettingsChange::AspectRatio(AspectRatio::new(3, 4)))
            .with(SettingsChange::BackgroundColor("#ff0000".to_string()));
        let style = RenderStyle::from_settings(&settings);

        assert_eq!(style.spacing, 12.0);
        assert_eq!(style.radius, 12.0);
        assert_eq!(style.background, Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#fff"), Some(Color::WHITE));
        assert_eq!(parse_hex_color("#000000"), Some(Color::BLACK));
        assert_eq!(parse_hex_color("000000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("#+1+1+1"), None);
        assert_eq!(parse_hex_color("#-ff"), None);
    }
}
