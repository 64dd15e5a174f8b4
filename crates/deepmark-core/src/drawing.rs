//! Pointer-gesture state machine for the drawing tools.

use log::debug;
use uuid::Uuid;

use crate::annotation::{Annotation, AnnotationId, Lifecycle, Style};
use crate::bounds;
use crate::editor::{EditorAction, EditorSession};
use crate::error::AnnotationError;
use crate::input::PointerInput;
use crate::shapes::{ShapeBuilder, ShapeKind};
use crate::space::ViewportPoint;
use crate::store::AnnotationStore;
use crate::transform;
use crate::viewer::Viewer;

/// The externally selected tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pan the viewer; never creates shapes.
    #[default]
    Hand,
    Line,
    Rectangle,
    Circle,
    Freehand,
}

impl Tool {
    /// The shape kind this tool draws, or `None` for the hand tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Hand => None,
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Freehand => Some(ShapeKind::Freehand),
        }
    }
}

/// Gesture state. `Drawing` owns the single temp shape; `Panning`
/// remembers the last viewport-space sample for delta panning.
#[derive(Debug, Clone)]
enum GestureState {
    Idle,
    Drawing {
        id: AnnotationId,
        builder: ShapeBuilder,
    },
    Panning {
        last: ViewportPoint,
    },
}

/// Owns the active tool, the pointer-down/move/up lifecycle, and the
/// single in-progress temp shape.
///
/// All transitions run synchronously on event dispatch. Every failure
/// (no image, bad sample, spurious event) is recovered here by
/// abandoning the gesture; nothing propagates.
#[derive(Debug, Clone)]
pub struct DrawingStateMachine {
    tool: Tool,
    state: GestureState,
    style: Style,
}

impl Default for DrawingStateMachine {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            state: GestureState::Idle,
            style: Style::default(),
        }
    }
}

impl DrawingStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Any in-progress gesture is discarded, so the
    /// single-temp invariant holds across tool changes.
    pub fn set_tool(&mut self, tool: Tool) {
        if matches!(self.state, GestureState::Drawing { .. }) {
            debug!("tool switched mid-gesture, discarding temp shape");
        }
        self.state = GestureState::Idle;
        self.tool = tool;
    }

    /// Style applied to newly committed shapes.
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, GestureState::Panning { .. })
    }

    /// The single in-progress temp annotation, assembled on demand for
    /// visual feedback. Never stored, never exposed as committed.
    pub fn temp_annotation(&self) -> Option<Annotation> {
        match &self.state {
            GestureState::Drawing { id, builder } => {
                Some(Annotation::temp(*id, builder.preview(), self.style.clone()))
            }
            _ => None,
        }
    }

    /// Begin a gesture. With a drawing tool this starts the matching
    /// shape builder at the clamped image-space point; with the hand
    /// tool it records the viewport-space pan anchor. A pointer-down
    /// before any image is open is a no-op.
    pub fn pointer_down(
        &mut self,
        input: &PointerInput,
        viewer: &dyn Viewer,
        store: &mut AnnotationStore,
    ) {
        // Starting over always discards a stray gesture first.
        if matches!(self.state, GestureState::Drawing { .. }) {
            debug!("pointer-down during active gesture, discarding temp shape");
        }
        self.state = GestureState::Idle;
        store.purge_temp();

        let Some(position) = input.position else {
            debug!("pointer-down without position, ignored");
            return;
        };

        let Some(kind) = self.tool.shape_kind() else {
            if position.is_finite() {
                self.state = GestureState::Panning {
                    last: viewer.window_to_viewport(position),
                };
            }
            return;
        };

        match transform::screen_to_image(viewer, position) {
            Ok(image_point) => {
                if let Some(dims) = viewer.image_dimensions() {
                    self.state = GestureState::Drawing {
                        id: Uuid::new_v4(),
                        builder: ShapeBuilder::begin(kind, bounds::clamp(image_point, dims)),
                    };
                }
            }
            Err(AnnotationError::NoImageLoaded) => {
                debug!("draw start ignored: no image loaded");
            }
            Err(err) => {
                debug!("draw start ignored: {err}");
            }
        }
    }

    /// Continue a gesture: pan the viewer, or forward the clamped
    /// current point to the active builder. Samples arriving while a
    /// second touch is down are ignored (reserved for pinch-zoom); a
    /// non-finite sample aborts the gesture.
    pub fn pointer_move(&mut self, input: &PointerInput, viewer: &mut dyn Viewer) {
        let abort = match &mut self.state {
            GestureState::Idle => None,
            GestureState::Panning { last } => {
                if let Some(position) = input.position.filter(|p| p.is_finite()) {
                    let current = viewer.window_to_viewport(position);
                    let delta = last.delta_to(current);
                    *last = current;
                    viewer.pan_by(delta);
                }
                None
            }
            GestureState::Drawing { builder, .. } => {
                if input.is_multi_touch() {
                    None
                } else if let Some(position) = input.position {
                    match transform::screen_to_image(viewer, position) {
                        Ok(image_point) => {
                            if let Some(dims) = viewer.image_dimensions() {
                                builder.update(bounds::clamp(image_point, dims));
                            }
                            None
                        }
                        Err(err) => Some(err),
                    }
                } else {
                    Some(AnnotationError::InvalidGeometry)
                }
            }
        };
        if let Some(err) = abort {
            self.abort_gesture(err);
        }
    }

    /// End a gesture. A drawing gesture finalizes its builder,
    /// promotes the temp shape to committed, appends it to the store,
    /// and opens an editor session for its label. A pointer-up with
    /// nothing in progress is recovered as a no-op.
    pub fn pointer_up(
        &mut self,
        store: &mut AnnotationStore,
        session: &mut EditorSession,
    ) -> Option<AnnotationId> {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Idle => {
                debug!("pointer-up ignored: {}", AnnotationError::MalformedTempState);
                None
            }
            GestureState::Panning { .. } => None,
            GestureState::Drawing { id, builder } => {
                let mut annotation = Annotation::temp(id, builder.finish(), self.style.clone());
                annotation.lifecycle = Lifecycle::Committed;
                store.append(annotation);
                session.open(id, EditorAction::Add, store);
                Some(id)
            }
        }
    }

    /// Discard any in-progress gesture without committing.
    pub fn cancel_gesture(&mut self) {
        self.state = GestureState::Idle;
    }

    fn abort_gesture(&mut self, err: AnnotationError) {
        debug!("gesture aborted: {err}");
        self.state = GestureState::Idle;
    }
}
