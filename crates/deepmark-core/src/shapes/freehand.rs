//! Freehand path shape.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::space::ImagePoint;

/// A raw polyline in image space: one point per pointer sample, no
/// resampling or smoothing. Always holds at least one point; a
/// single-point path renders as a dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub points: Vec<ImagePoint>,
}

impl Freehand {
    pub fn from_points(points: Vec<ImagePoint>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the path degenerates to a single sample.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Image-space bounding box over all samples.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.points.iter();
        let first = match iter.next() {
            Some(p) => p,
            None => return Rect::ZERO,
        };
        let mut bounds = Rect::new(first.x(), first.y(), first.x(), first.y());
        for p in iter {
            bounds.x0 = bounds.x0.min(p.x());
            bounds.y0 = bounds.y0.min(p.y());
            bounds.x1 = bounds.x1.max(p.x());
            bounds.y1 = bounds.y1.max(p.y());
        }
        bounds
    }
}

/// Builds a freehand path: starts with the pointer-down sample and
/// appends one point per pointer-move. Appending is O(1) amortized so
/// it can run at input-event rate.
#[derive(Debug, Clone)]
pub struct FreehandBuilder {
    points: Vec<ImagePoint>,
}

impl FreehandBuilder {
    pub fn begin(start: ImagePoint) -> Self {
        Self {
            points: vec![start],
        }
    }

    pub fn update(&mut self, current: ImagePoint) {
        self.points.push(current);
    }

    pub fn preview(&self) -> Freehand {
        Freehand::from_points(self.points.clone())
    }

    pub fn finish(self) -> Freehand {
        Freehand::from_points(self.points)
    }
}
