//! Deepmark Core
//!
//! Viewer-agnostic annotation core for deep-zoom images: pointer
//! gestures become image-space geometry that stays aligned with the
//! underlying image at any pan offset, zoom level, or viewport size.
//! The deep-zoom engine itself is an external collaborator behind the
//! [`viewer::Viewer`] trait.

pub mod annotation;
pub mod bounds;
pub mod bridge;
pub mod drawing;
pub mod editor;
pub mod error;
pub mod input;
pub mod overlay;
pub mod shapes;
pub mod space;
pub mod store;
pub mod transform;
pub mod viewer;

pub use annotation::{Annotation, AnnotationId, Lifecycle, Rgba, Style};
pub use bridge::{BridgeAction, ViewerEventBridge};
pub use drawing::{DrawingStateMachine, Tool};
pub use editor::{EditorAction, EditorSession};
pub use error::{AnnotationError, AnnotationResult};
pub use input::PointerInput;
pub use overlay::AnnotationOverlay;
pub use shapes::{Geometry, ShapeBuilder, ShapeKind};
pub use space::{ImagePoint, ScreenPoint, ViewportPoint};
pub use store::AnnotationStore;
pub use viewer::{PanZoomViewer, Viewer, ViewerConfig, ViewerEvent};
