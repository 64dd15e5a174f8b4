//! Shape geometry and per-kind builders.
//!
//! Geometry is always stored in image space, which keeps committed
//! annotations invariant under pan and zoom: only the on-screen
//! projection changes, recomputed at render time.

mod circle;
mod freehand;
mod line;
mod rectangle;

pub use circle::{Circle, CircleBuilder};
pub use freehand::{Freehand, FreehandBuilder};
pub use line::{Line, LineBuilder};
pub use rectangle::{Rectangle, RectangleBuilder};

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::space::ImagePoint;

/// The annotation shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Freehand,
}

/// Kind-specific geometry, in image space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Freehand(Freehand),
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Line(_) => ShapeKind::Line,
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Circle(_) => ShapeKind::Circle,
            Geometry::Freehand(_) => ShapeKind::Freehand,
        }
    }

    /// Image-space bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Geometry::Line(s) => s.bounds(),
            Geometry::Rectangle(s) => s.bounds(),
            Geometry::Circle(s) => s.bounds(),
            Geometry::Freehand(s) => s.bounds(),
        }
    }
}

/// One in-progress shape, dispatched by kind.
///
/// Builders own the transient geometry of the active gesture: fixed
/// anchor at pointer-down, tracking updates on pointer-move, and a
/// final normalized [`Geometry`] on finish.
#[derive(Debug, Clone)]
pub enum ShapeBuilder {
    Line(LineBuilder),
    Rectangle(RectangleBuilder),
    Circle(CircleBuilder),
    Freehand(FreehandBuilder),
}

impl ShapeBuilder {
    /// Start the builder matching `kind` at the gesture's first
    /// (bounds-clamped, image-space) point.
    pub fn begin(kind: ShapeKind, start: ImagePoint) -> Self {
        match kind {
            ShapeKind::Line => ShapeBuilder::Line(LineBuilder::begin(start)),
            ShapeKind::Rectangle => ShapeBuilder::Rectangle(RectangleBuilder::begin(start)),
            ShapeKind::Circle => ShapeBuilder::Circle(CircleBuilder::begin(start)),
            ShapeKind::Freehand => ShapeBuilder::Freehand(FreehandBuilder::begin(start)),
        }
    }

    /// Forward the current pointer sample to the active builder.
    pub fn update(&mut self, current: ImagePoint) {
        match self {
            ShapeBuilder::Line(b) => b.update(current),
            ShapeBuilder::Rectangle(b) => b.update(current),
            ShapeBuilder::Circle(b) => b.update(current),
            ShapeBuilder::Freehand(b) => b.update(current),
        }
    }

    /// Snapshot of the in-progress geometry, for temp-shape feedback.
    pub fn preview(&self) -> Geometry {
        match self {
            ShapeBuilder::Line(b) => Geometry::Line(b.preview()),
            ShapeBuilder::Rectangle(b) => Geometry::Rectangle(b.preview()),
            ShapeBuilder::Circle(b) => Geometry::Circle(b.preview()),
            ShapeBuilder::Freehand(b) => Geometry::Freehand(b.preview()),
        }
    }

    /// Consume the builder, yielding the final normalized geometry.
    pub fn finish(self) -> Geometry {
        match self {
            ShapeBuilder::Line(b) => Geometry::Line(b.finish()),
            ShapeBuilder::Rectangle(b) => Geometry::Rectangle(b.finish()),
            ShapeBuilder::Circle(b) => Geometry::Circle(b.finish()),
            ShapeBuilder::Freehand(b) => Geometry::Freehand(b.finish()),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeBuilder::Line(_) => ShapeKind::Line,
            ShapeBuilder::Rectangle(_) => ShapeKind::Rectangle,
            ShapeBuilder::Circle(_) => ShapeKind::Circle,
            ShapeBuilder::Freehand(_) => ShapeKind::Freehand,
        }
    }
}
