//! Deepmark Render
//!
//! Turns stored image-space annotations into screen-space primitives
//! for whatever drawing backend hosts the overlay, and tracks the
//! backend's per-annotation visual handles. This crate stays backend
//! agnostic: it emits geometry, never draw calls.

pub mod handles;
pub mod projection;

pub use handles::HandleRegistry;
pub use projection::{project, project_all, ProjectedAnnotation, ScreenShape};
