//! Unified pointer input for mouse and touch events.

use serde::{Deserialize, Serialize};

use crate::space::ScreenPoint;

/// One pointer sample, mouse or touch.
///
/// `position` is `None` when the platform event carried no usable
/// coordinate (e.g. a touch list that lost its primary touch); the
/// drawing state machine treats that as an aborted gesture rather
/// than an error. `touches` is the number of simultaneously active
/// touch points, 0 for mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub position: Option<ScreenPoint>,
    pub touches: u8,
}

impl PointerInput {
    /// A mouse sample at the given window coordinates.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            position: Some(ScreenPoint::new(x, y)),
            touches: 0,
        }
    }

    /// A touch sample with its active touch count.
    pub fn touch(x: f64, y: f64, touches: u8) -> Self {
        Self {
            position: Some(ScreenPoint::new(x, y)),
            touches,
        }
    }

    /// A touch event whose primary touch point is missing.
    pub fn missing_touch(touches: u8) -> Self {
        Self {
            position: None,
            touches,
        }
    }

    /// True while a second finger is down: moves are reserved for the
    /// viewer's pinch-zoom, not shape editing.
    pub fn is_multi_touch(&self) -> bool {
        self.touches >= 2
    }
}
