//! Line shape.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::space::ImagePoint;

/// A straight line segment in image space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: ImagePoint,
    pub end: ImagePoint,
}

impl Line {
    pub fn new(start: ImagePoint, end: ImagePoint) -> Self {
        Self { start, end }
    }

    /// Length of the segment in image pixels.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Image-space bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.start.x().min(self.end.x()),
            self.start.y().min(self.end.y()),
            self.start.x().max(self.end.x()),
            self.start.y().max(self.end.y()),
        )
    }
}

/// Builds a line: the start point is fixed at pointer-down, the end
/// point tracks every pointer-move.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    start: ImagePoint,
    end: ImagePoint,
}

impl LineBuilder {
    pub fn begin(start: ImagePoint) -> Self {
        Self { start, end: start }
    }

    pub fn update(&mut self, current: ImagePoint) {
        self.end = current;
    }

    pub fn preview(&self) -> Line {
        Line::new(self.start, self.end)
    }

    pub fn finish(self) -> Line {
        Line::new(self.start, self.end)
    }
}
