//! Ordered in-memory collection of committed annotations.

use log::debug;

use crate::annotation::{Annotation, AnnotationId};

/// Insertion-ordered annotation collection. All operations are
/// synchronous; there is no persistence behind it.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation, preserving insertion order.
    pub fn append(&mut self, annotation: Annotation) {
        debug_assert!(
            !self.annotations.iter().any(|a| a.id == annotation.id),
            "duplicate annotation id"
        );
        self.annotations.push(annotation);
    }

    /// Remove and return the most recently appended annotation.
    /// No-op returning `None` when the store is empty.
    pub fn remove_last(&mut self) -> Option<Annotation> {
        self.annotations.pop()
    }

    /// Remove the annotation with the given id. Returns whether one
    /// was removed; the relative order of the rest is preserved.
    pub fn remove_by_id(&mut self, id: AnnotationId) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        self.annotations.len() != before
    }

    /// Remove every annotation.
    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Drop any temp entries. Committed gestures never land here as
    /// temp, but a reentrant callback could; purging on every gesture
    /// start keeps the single-temp invariant.
    pub fn purge_temp(&mut self) {
        let before = self.annotations.len();
        self.annotations.retain(|a| !a.is_temp());
        if self.annotations.len() != before {
            debug!("purged {} stray temp annotation(s)", before - self.annotations.len());
        }
    }

    /// Committed annotations in insertion order.
    pub fn list(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Style;
    use crate::shapes::{Geometry, Line};
    use crate::space::ImagePoint;

    fn line_annotation() -> Annotation {
        Annotation::committed(
            Geometry::Line(Line::new(ImagePoint::ZERO, ImagePoint::new(1.0, 1.0))),
            Style::default(),
        )
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = AnnotationStore::new();
        let a = line_annotation();
        let b = line_annotation();
        let (id_a, id_b) = (a.id, b.id);
        store.append(a);
        store.append(b);
        let ids: Vec<_> = store.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![id_a, id_b]);
    }

    #[test]
    fn test_remove_last_on_empty_is_noop() {
        let mut store = AnnotationStore::new();
        assert!(store.remove_last().is_none());
    }

    #[test]
    fn test_remove_by_id_keeps_relative_order() {
        let mut store = AnnotationStore::new();
        let annotations: Vec<_> = (0..4).map(|_| line_annotation()).collect();
        let ids: Vec<_> = annotations.iter().map(|a| a.id).collect();
        for a in annotations {
            store.append(a);
        }

        assert!(store.remove_by_id(ids[1]));
        assert!(!store.remove_by_id(ids[1]));

        let remaining: Vec<_> = store.list().iter().map(|a| a.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_ids_stay_unique_across_removals() {
        let mut store = AnnotationStore::new();
        for _ in 0..5 {
            store.append(line_annotation());
        }
        store.remove_last();
        store.remove_last();
        store.append(line_annotation());

        let mut ids: Vec<_> = store.list().iter().map(|a| a.id).collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_purge_temp_leaves_committed() {
        let mut store = AnnotationStore::new();
        let committed = line_annotation();
        let committed_id = committed.id;
        store.append(committed);

        let mut stray = line_annotation();
        stray.lifecycle = crate::annotation::Lifecycle::Temp;
        store.append(stray);

        store.purge_temp();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, committed_id);
    }

    #[test]
    fn test_clear() {
        let mut store = AnnotationStore::new();
        store.append(line_annotation());
        store.clear();
        assert!(store.is_empty());
    }
}
