//! Rectangle shape.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::space::ImagePoint;

/// An axis-aligned rectangle in image space, normalized so `origin` is
/// the top-left corner and `width`/`height` are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub origin: ImagePoint,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Build a normalized rectangle from two opposite corners, in any
    /// drag direction.
    pub fn from_corners(a: ImagePoint, b: ImagePoint) -> Self {
        Self {
            origin: ImagePoint::new(a.x().min(b.x()), a.y().min(b.y())),
            width: (b.x() - a.x()).abs(),
            height: (b.y() - a.y()).abs(),
        }
    }

    /// Image-space bounding box (the rectangle itself).
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x(),
            self.origin.y(),
            self.origin.x() + self.width,
            self.origin.y() + self.height,
        )
    }
}

/// Builds a rectangle: the anchor corner is fixed at pointer-down, the
/// opposite corner tracks pointer-move. Normalization happens on every
/// preview so the drag direction never leaks into stored geometry.
#[derive(Debug, Clone)]
pub struct RectangleBuilder {
    anchor: ImagePoint,
    current: ImagePoint,
}

impl RectangleBuilder {
    pub fn begin(anchor: ImagePoint) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    pub fn update(&mut self, current: ImagePoint) {
        self.current = current;
    }

    pub fn preview(&self) -> Rectangle {
        Rectangle::from_corners(self.anchor, self.current)
    }

    pub fn finish(self) -> Rectangle {
        Rectangle::from_corners(self.anchor, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_is_direction_independent() {
        let forward = Rectangle::from_corners(ImagePoint::new(10.0, 10.0), ImagePoint::new(50.0, 50.0));
        let backward = Rectangle::from_corners(ImagePoint::new(50.0, 50.0), ImagePoint::new(10.0, 10.0));
        assert_eq!(forward, backward);
        assert_eq!(forward.origin, ImagePoint::new(10.0, 10.0));
        assert!((forward.width - 40.0).abs() < f64::EPSILON);
        assert!((forward.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_extent_rectangle_is_valid() {
        let rect = RectangleBuilder::begin(ImagePoint::new(5.0, 5.0)).finish();
        assert!((rect.width).abs() < f64::EPSILON);
        assert!((rect.height).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_updates() {
        let mut builder = RectangleBuilder::begin(ImagePoint::new(30.0, 20.0));
        builder.update(ImagePoint::new(10.0, 60.0));
        let rect = builder.finish();
        assert_eq!(rect.origin, ImagePoint::new(10.0, 20.0));
        assert!((rect.width - 20.0).abs() < f64::EPSILON);
        assert!((rect.height - 40.0).abs() < f64::EPSILON);
    }
}
