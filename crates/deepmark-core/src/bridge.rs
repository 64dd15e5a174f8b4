//! Keeps the annotation overlay glued to the viewer.

use kurbo::Rect;
use log::debug;

use crate::viewer::{Viewer, ViewerEvent};

/// What the overlay owner must do after an event was bridged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeAction {
    /// Only the overlay surface moved; stored geometry re-projects at
    /// render time, nothing else to do.
    Repositioned,
    /// A new image opened: discard gestures, sessions, and committed
    /// annotations, then reattach the overlay.
    ResetOverlay,
    /// The bridge is detached; the event was dropped.
    Detached,
}

/// Subscribes to the viewer's open/resize/viewport-change events and
/// keeps the overlay surface covering the viewer's display region.
///
/// Detaching is deterministic: after [`detach`](Self::detach) every
/// event is ignored, so callbacks can never fire against a torn-down
/// session.
#[derive(Debug, Clone)]
pub struct ViewerEventBridge {
    placement: Rect,
    attached: bool,
}

impl Default for ViewerEventBridge {
    fn default() -> Self {
        Self {
            placement: Rect::ZERO,
            attached: true,
        }
    }
}

impl ViewerEventBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one viewer event. Every event re-reads the display region
    /// so the overlay exactly covers the viewer.
    pub fn handle_event(&mut self, event: ViewerEvent, viewer: &dyn Viewer) -> BridgeAction {
        if !self.attached {
            return BridgeAction::Detached;
        }
        self.placement = viewer.display_region();
        match event {
            ViewerEvent::Open => {
                debug!("image opened, overlay reset to {:?}", self.placement);
                BridgeAction::ResetOverlay
            }
            ViewerEvent::Resize | ViewerEvent::ViewportChange => BridgeAction::Repositioned,
        }
    }

    /// Screen-space rectangle the overlay surface should occupy.
    pub fn placement(&self) -> Rect {
        self.placement
    }

    /// Stop listening. Idempotent.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
