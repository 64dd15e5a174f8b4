//! Circle shape.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::space::ImagePoint;

/// A circle in image space.
///
/// The radius is stored in image pixels, computed after both the
/// center and the rim point have been converted to image space. That
/// makes it independent of the zoom level at draw time: a circle
/// committed at zoom 3 replays identically at zoom 0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: ImagePoint,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: ImagePoint, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Image-space bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x() - self.radius,
            self.center.y() - self.radius,
            self.center.x() + self.radius,
            self.center.y() + self.radius,
        )
    }
}

/// Builds a circle: the center is fixed at pointer-down, the radius is
/// the image-space distance to the current pointer.
#[derive(Debug, Clone)]
pub struct CircleBuilder {
    center: ImagePoint,
    rim: ImagePoint,
}

impl CircleBuilder {
    pub fn begin(center: ImagePoint) -> Self {
        Self { center, rim: center }
    }

    pub fn update(&mut self, current: ImagePoint) {
        self.rim = current;
    }

    pub fn preview(&self) -> Circle {
        Circle::new(self.center, self.center.distance(self.rim))
    }

    pub fn finish(self) -> Circle {
        Circle::new(self.center, self.center.distance(self.rim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_image_space_distance() {
        let mut builder = CircleBuilder::begin(ImagePoint::new(100.0, 100.0));
        builder.update(ImagePoint::new(103.0, 104.0));
        let circle = builder.finish();
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_radius_circle_is_valid() {
        let circle = CircleBuilder::begin(ImagePoint::new(10.0, 10.0)).finish();
        assert!((circle.radius).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(ImagePoint::new(50.0, 50.0), 10.0);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 60.0).abs() < f64::EPSILON);
    }
}
