//! Maps annotation ids to backend visual handles.
//!
//! A drawing backend typically hands back an opaque object per drawn
//! shape (an SVG node, a scene fragment, a retained-mode element). The
//! registry keeps the id-to-handle association so targeted updates and
//! removals don't require a full redraw.

use std::collections::HashMap;

use deepmark_core::annotation::AnnotationId;
use log::debug;

/// Registry of visual handles, generic over the backend's handle type.
#[derive(Debug, Clone)]
pub struct HandleRegistry<H> {
    handles: HashMap<AnnotationId, H>,
}

impl<H> HandleRegistry<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Associate a handle with an annotation, returning the previous
    /// handle if one was bound (the caller disposes of it).
    pub fn bind(&mut self, id: AnnotationId, handle: H) -> Option<H> {
        let previous = self.handles.insert(id, handle);
        if previous.is_some() {
            debug!("rebound handle for annotation {id}");
        }
        previous
    }

    pub fn resolve(&self, id: AnnotationId) -> Option<&H> {
        self.handles.get(&id)
    }

    pub fn resolve_mut(&mut self, id: AnnotationId) -> Option<&mut H> {
        self.handles.get_mut(&id)
    }

    /// Drop the association, returning the handle for disposal.
    pub fn release(&mut self, id: AnnotationId) -> Option<H> {
        self.handles.remove(&id)
    }

    /// Keep only handles whose annotation still exists; returns the
    /// orphaned handles for disposal.
    pub fn retain_ids<F>(&mut self, mut keep: F) -> Vec<H>
    where
        F: FnMut(AnnotationId) -> bool,
    {
        let doomed: Vec<AnnotationId> = self
            .handles
            .keys()
            .copied()
            .filter(|id| !keep(*id))
            .collect();
        doomed
            .into_iter()
            .filter_map(|id| self.handles.remove(&id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
