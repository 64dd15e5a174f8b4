//! Space-tagged point types.
//!
//! Annotation geometry moves through three coordinate spaces: raw
//! pointer pixels (screen), the viewer's normalized visible region
//! (viewport), and the loaded image's native pixel grid (image).
//! Each space gets its own newtype over [`kurbo::Point`], so passing a
//! point from one space where another is expected is a compile error.
//! Conversions happen only through the [`Viewer`](crate::viewer::Viewer)
//! contract and [`transform`](crate::transform).

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

macro_rules! space_point {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Point);

        impl $name {
            pub const ZERO: Self = Self(Point::ZERO);

            pub fn new(x: f64, y: f64) -> Self {
                Self(Point::new(x, y))
            }

            pub fn x(&self) -> f64 {
                self.0.x
            }

            pub fn y(&self) -> f64 {
                self.0.y
            }

            /// Euclidean distance to another point in the same space.
            pub fn distance(&self, other: Self) -> f64 {
                self.0.distance(other.0)
            }

            /// Displacement to another point in the same space.
            pub fn delta_to(&self, other: Self) -> Vec2 {
                other.0 - self.0
            }

            /// Translate by an offset expressed in this space's units.
            pub fn offset_by(&self, delta: Vec2) -> Self {
                Self(self.0 + delta)
            }

            /// True when both components are finite (not NaN/inf).
            pub fn is_finite(&self) -> bool {
                self.0.is_finite()
            }

            /// Untagged point, for handing to the viewer boundary.
            pub fn raw(&self) -> Point {
                self.0
            }

            /// Tag an untagged point coming back from the viewer boundary.
            pub fn from_raw(point: Point) -> Self {
                Self(point)
            }
        }

        impl From<$name> for Point {
            fn from(p: $name) -> Point {
                p.0
            }
        }
    };
}

space_point!(
    /// A point in screen space: raw pointer/touch pixels relative to
    /// the display surface.
    ScreenPoint
);

space_point!(
    /// A point in the viewer's normalized viewport space.
    ViewportPoint
);

space_point!(
    /// A point anchored to the loaded image's native pixel grid.
    /// This is the only space that is persisted: it is invariant under
    /// pan and zoom.
    ImagePoint
);
