/// Rounded tile corners
///
/// Images paint over their container's background, so the corner radius
/// is drawn on top of them instead: each corner outside the quarter
/// circle is filled with the canvas background.
use iced::widget::canvas::{self, path, Path};
use iced::{Color, Point, Rectangle, Size};

use crate::Message;

/// Corner masks for one grid tile
#[derive(Debug, Clone, Copy)]
pub struct CornerMask {
    /// Requested radius in logical pixels
    pub radius: f32,
    /// Canvas background the corners blend into
    pub color: Color,
}

impl CornerMask {
    pub fn new(radius: f32, color: Color) -> Self {
        Self { radius, color }
    }
}

/// Radius that fits the tile: at most half of its shorter side
pub fn fitted_radius(radius: f32, size: Size) -> f32 {
    radius.min(size.width / 2.0).min(size.height / 2.0).max(0.0)
}

/// For every corner: the corner itself, then the points on its horizontal
/// and vertical edges where the arc starts and ends
pub fn corner_points(size: Size, radius: f32) -> [[Point; 3]; 4] {
    let (w, h, r) = (size.width, size.height, radius);
    [
        [Point::ORIGIN, Point::new(r, 0.0), Point::new(0.0, r)],
        [Point::new(w, 0.0), Point::new(w - r, 0.0), Point::new(w, r)],
        [Point::new(w, h), Point::new(w - r, h), Point::new(w, h - r)],
        [Point::new(0.0, h), Point::new(r, h), Point::new(0.0, h - r)],
    ]
}

impl canvas::Program<Message> for CornerMask {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let radius = fitted_radius(self.radius, bounds.size());
        if radius <= 0.0 {
            return vec![frame.into_geometry()];
        }

        for [corner, start, end] in corner_points(bounds.size(), radius) {
            let mut builder = path::Builder::new();
            builder.move_to(corner);
            builder.line_to(start);
            builder.arc_to(corner, end, radius);
            builder.close();
            let mask: Path = builder.build();
            frame.fill(&mask, self.color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_clamped_to_tile() {
        assert_eq!(fitted_radius(12.0, Size::new(200.0, 100.0)), 12.0);
        assert_eq!(fitted_radius(120.0, Size::new(200.0, 100.0)), 50.0);
        assert_eq!(fitted_radius(0.0, Size::new(200.0, 100.0)), 0.0);
    }

    #[test]
    fn test_corner_points() {
        let corners = corner_points(Size::new(100.0, 60.0), 10.0);
        assert_eq!(
            corners[0],
            [Point::ORIGIN, Point::new(10.0, 0.0), Point::new(0.0, 10.0)]
        );
        assert_eq!(
            corners[2],
            [Point::new(100.0, 60.0), Point::new(90.0, 60.0), Point::new(100.0, 50.0)]
        );
        // Arc endpoints sit exactly one radius from their corner
        for [corner, start, end] in corners {
            assert_eq!(corner.distance(start), 10.0);
            assert_eq!(corner.distance(end), 10.0);
        }
    }
}
