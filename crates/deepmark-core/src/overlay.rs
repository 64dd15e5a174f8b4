//! Application-facing annotation overlay.
//!
//! Bundles the drawing state machine, the annotation store, the label
//! editor session, and the viewer event bridge into the one surface
//! the surrounding application talks to. The viewer is passed into
//! each call rather than owned, so the overlay works against any
//! deep-zoom engine implementing [`Viewer`].

use kurbo::Rect;

use crate::annotation::{Annotation, AnnotationId, Style};
use crate::bridge::{BridgeAction, ViewerEventBridge};
use crate::drawing::{DrawingStateMachine, Tool};
use crate::editor::{EditorAction, EditorSession};
use crate::input::PointerInput;
use crate::store::AnnotationStore;
use crate::viewer::{Viewer, ViewerEvent};

/// The annotation overlay for one viewer.
#[derive(Debug, Clone, Default)]
pub struct AnnotationOverlay {
    machine: DrawingStateMachine,
    store: AnnotationStore,
    session: EditorSession,
    bridge: ViewerEventBridge,
}

impl AnnotationOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    // --- tool & style ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.machine.set_tool(tool);
    }

    pub fn tool(&self) -> Tool {
        self.machine.tool()
    }

    pub fn set_style(&mut self, style: Style) {
        self.machine.set_style(style);
    }

    pub fn style(&self) -> &Style {
        self.machine.style()
    }

    // --- pointer lifecycle ---

    /// A pointer-down first gives the open editor session its chance
    /// to cancel on an outside click, then starts a gesture. A press
    /// landing on the editor UI itself stays with the editor and never
    /// reaches the drawing tools.
    pub fn pointer_down(&mut self, input: &PointerInput, viewer: &dyn Viewer) {
        if let Some(position) = input.position {
            let was_open = self.session.is_open();
            let cancelled = self.session.notice_pointer_down(position, &mut self.store);
            if was_open && !cancelled {
                return;
            }
        }
        self.machine.pointer_down(input, viewer, &mut self.store);
    }

    pub fn pointer_move(&mut self, input: &PointerInput, viewer: &mut dyn Viewer) {
        self.machine.pointer_move(input, viewer);
    }

    /// Finish the gesture; returns the committed annotation's id, if
    /// a shape was drawn. The editor session for its label is already
    /// open when this returns.
    pub fn pointer_up(&mut self, _input: &PointerInput) -> Option<AnnotationId> {
        self.machine.pointer_up(&mut self.store, &mut self.session)
    }

    /// The single in-progress temp shape, for live feedback rendering.
    pub fn temp_annotation(&self) -> Option<Annotation> {
        self.machine.temp_annotation()
    }

    // --- committed annotations ---

    pub fn annotations(&self) -> &[Annotation] {
        self.store.list()
    }

    pub fn remove_last_annotation(&mut self) -> Option<Annotation> {
        self.store.remove_last()
    }

    pub fn remove_annotation(&mut self, id: AnnotationId) -> bool {
        self.store.remove_by_id(id)
    }

    pub fn clear_annotations(&mut self) {
        self.store.clear();
    }

    // --- editor session ---

    /// Open an update session for an existing annotation.
    pub fn select_for_edit(&mut self, id: AnnotationId) {
        self.session.open(id, EditorAction::Update, &mut self.store);
    }

    /// Open a delete session for an existing annotation; the removal
    /// happens on confirm.
    pub fn select_for_delete(&mut self, id: AnnotationId) {
        self.session.open(id, EditorAction::Delete, &mut self.store);
    }

    pub fn confirm_label(&mut self, text: &str) {
        self.session.confirm(text, &mut self.store);
    }

    pub fn cancel_label(&mut self) {
        self.session.cancel(&mut self.store);
    }

    /// Register the screen-space region occupied by the editor UI so
    /// outside clicks can cancel the session.
    pub fn set_editor_region(&mut self, region: Option<Rect>) {
        self.session.set_region(region);
    }

    pub fn editor_session(&self) -> &EditorSession {
        &self.session
    }

    // --- viewer events ---

    /// Route a viewer event. An `Open` resets the whole overlay: the
    /// previous image's annotations do not carry over.
    pub fn handle_viewer_event(&mut self, event: ViewerEvent, viewer: &dyn Viewer) {
        match self.bridge.handle_event(event, viewer) {
            BridgeAction::ResetOverlay => {
                self.session.cancel(&mut self.store);
                self.machine.cancel_gesture();
                self.store.clear();
            }
            BridgeAction::Repositioned | BridgeAction::Detached => {}
        }
    }

    /// Screen-space rectangle the overlay surface should cover.
    pub fn overlay_placement(&self) -> Rect {
        self.bridge.placement()
    }

    /// Release the viewer subscription; later viewer events are
    /// ignored deterministically.
    pub fn detach(&mut self) {
        self.bridge.detach();
    }
}
