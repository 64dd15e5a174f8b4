//! Label-entry session for freshly drawn or selected annotations.
//!
//! A session binds one annotation at a time. For an `Add` action the
//! whole draw-then-label flow is a single logical transaction:
//! cancelling rolls the just-committed annotation back out of the
//! store, leaving it as if the gesture never happened.

use kurbo::Rect;
use log::{debug, warn};

use crate::annotation::AnnotationId;
use crate::space::ScreenPoint;
use crate::store::AnnotationStore;

/// What the open session will do to its annotation on confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Label a shape that was just committed by a gesture.
    Add,
    /// Re-label an existing annotation.
    Update,
    /// Remove an existing annotation.
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Closed,
    AwaitingInput {
        id: AnnotationId,
        action: EditorAction,
    },
}

/// The text-entry popup lifecycle, bound to at most one annotation.
#[derive(Debug, Clone)]
pub struct EditorSession {
    state: SessionState,
    /// Screen-space region occupied by the editor UI, registered by
    /// the surrounding application. Pointer-downs outside it cancel
    /// the session; with no region registered, every pointer-down
    /// counts as outside.
    region: Option<Rect>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            state: SessionState::Closed,
            region: None,
        }
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `id`. An already-open session is cancelled
    /// first so an `Add` in flight can never leak an unlabeled
    /// annotation.
    pub fn open(&mut self, id: AnnotationId, action: EditorAction, store: &mut AnnotationStore) {
        if self.is_open() {
            warn!("editor session replaced while awaiting input");
            self.cancel(store);
        }
        debug!("editor session opened: {action:?} {id}");
        self.state = SessionState::AwaitingInput { id, action };
    }

    /// Attach `text` as the annotation's label (or perform the
    /// deletion for a `Delete` session) and close.
    pub fn confirm(&mut self, text: &str, store: &mut AnnotationStore) {
        match self.state {
            SessionState::Closed => warn!("confirm with no open editor session"),
            SessionState::AwaitingInput { id, action } => match action {
                EditorAction::Add | EditorAction::Update => {
                    if let Some(annotation) = store.get_mut(id) {
                        annotation.label = Some(text.to_string());
                    } else {
                        warn!("confirm for missing annotation {id}");
                    }
                }
                EditorAction::Delete => {
                    store.remove_by_id(id);
                }
            },
        }
        self.state = SessionState::Closed;
    }

    /// Close without applying. An `Add` session additionally rolls
    /// back the just-committed annotation.
    pub fn cancel(&mut self, store: &mut AnnotationStore) {
        if let SessionState::AwaitingInput { id, action } = self.state {
            if action == EditorAction::Add {
                debug!("add cancelled, rolling back {id}");
                store.remove_by_id(id);
            }
        }
        self.state = SessionState::Closed;
    }

    /// Register (or clear) the editor UI's screen-space region.
    pub fn set_region(&mut self, region: Option<Rect>) {
        self.region = region;
    }

    /// Handle a pointer-down while a session may be open: a press
    /// outside the registered editor region is an implicit cancel.
    /// Returns whether the session was cancelled.
    pub fn notice_pointer_down(&mut self, p: ScreenPoint, store: &mut AnnotationStore) -> bool {
        if !self.is_open() {
            return false;
        }
        let inside = self.region.is_some_and(|r| r.contains(p.raw()));
        if inside {
            return false;
        }
        self.cancel(store);
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::AwaitingInput { .. })
    }

    /// The bound annotation and pending action, while open.
    pub fn current(&self) -> Option<(AnnotationId, EditorAction)> {
        match self.state {
            SessionState::Closed => None,
            SessionState::AwaitingInput { id, action } => Some((id, action)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Annotation, Style};
    use crate::shapes::{Circle, Geometry};
    use crate::space::ImagePoint;

    fn store_with_circle() -> (AnnotationStore, AnnotationId) {
        let mut store = AnnotationStore::new();
        let annotation = Annotation::committed(
            Geometry::Circle(Circle::new(ImagePoint::new(10.0, 10.0), 5.0)),
            Style::default(),
        );
        let id = annotation.id;
        store.append(annotation);
        (store, id)
    }

    #[test]
    fn test_confirm_attaches_label() {
        let (mut store, id) = store_with_circle();
        let mut session = EditorSession::new();
        session.open(id, EditorAction::Add, &mut store);
        session.confirm("tumor margin", &mut store);

        assert!(!session.is_open());
        assert_eq!(store.get(id).unwrap().label.as_deref(), Some("tumor margin"));
    }

    #[test]
    fn test_cancel_add_rolls_back() {
        let (mut store, id) = store_with_circle();
        let mut session = EditorSession::new();
        session.open(id, EditorAction::Add, &mut store);
        session.cancel(&mut store);

        assert!(!session.is_open());
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancel_update_keeps_annotation() {
        let (mut store, id) = store_with_circle();
        let mut session = EditorSession::new();
        session.open(id, EditorAction::Update, &mut store);
        session.cancel(&mut store);

        assert_eq!(store.len(), 1);
        assert!(store.get(id).unwrap().label.is_none());
    }

    #[test]
    fn test_confirm_delete_removes() {
        let (mut store, id) = store_with_circle();
        let mut session = EditorSession::new();
        session.open(id, EditorAction::Delete, &mut store);
        session.confirm("", &mut store);

        assert!(store.is_empty());
    }

    #[test]
    fn test_click_outside_region_cancels() {
        let (mut store, id) = store_with_circle();
        let mut session = EditorSession::new();
        session.set_region(Some(Rect::new(100.0, 100.0, 300.0, 200.0)));
        session.open(id, EditorAction::Add, &mut store);

        // Inside the editor region: session stays open.
        assert!(!session.notice_pointer_down(ScreenPoint::new(150.0, 150.0), &mut store));
        assert!(session.is_open());

        // Outside: implicit cancel, add rolls back.
        assert!(session.notice_pointer_down(ScreenPoint::new(10.0, 10.0), &mut store));
        assert!(!session.is_open());
        assert!(store.is_empty());
    }

    #[test]
    fn test_reopen_cancels_previous_add() {
        let (mut store, first) = store_with_circle();
        let second = Annotation::committed(
            Geometry::Circle(Circle::new(ImagePoint::new(20.0, 20.0), 3.0)),
            Style::default(),
        );
        let second_id = second.id;
        store.append(second);

        let mut session = EditorSession::new();
        session.open(first, EditorAction::Add, &mut store);
        session.open(second_id, EditorAction::Update, &mut store);

        // The interrupted add rolled back; the new session is bound to
        // the second annotation.
        assert!(store.get(first).is_none());
        assert_eq!(session.current(), Some((second_id, EditorAction::Update)));
    }
}
