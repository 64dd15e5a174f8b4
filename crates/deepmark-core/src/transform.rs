//! Screen ↔ image coordinate conversions.
//!
//! Pure functions composed from the viewer's conversion primitives.
//! The viewer's projection can change between any two calls (pan,
//! zoom, resize), so nothing here caches: every conversion reads the
//! viewer's current state and has no side effects.

use crate::error::{AnnotationError, AnnotationResult};
use crate::space::{ImagePoint, ScreenPoint};
use crate::viewer::Viewer;

/// Project a raw pointer position onto the loaded image's pixel grid.
///
/// Fails with [`AnnotationError::NoImageLoaded`] before an image is
/// open and with [`AnnotationError::InvalidGeometry`] when the input
/// or the projected result is non-finite (e.g. a missing touch point).
pub fn screen_to_image(viewer: &dyn Viewer, p: ScreenPoint) -> AnnotationResult<ImagePoint> {
    if viewer.image_dimensions().is_none() {
        return Err(AnnotationError::NoImageLoaded);
    }
    if !p.is_finite() {
        return Err(AnnotationError::InvalidGeometry);
    }
    let image = viewer.viewport_to_image(viewer.window_to_viewport(p));
    if !image.is_finite() {
        return Err(AnnotationError::InvalidGeometry);
    }
    Ok(image)
}

/// Project a stored image-space point to its current on-screen
/// position. Used only at render time; stored geometry never changes.
pub fn image_to_screen(viewer: &dyn Viewer, p: ImagePoint) -> AnnotationResult<ScreenPoint> {
    if viewer.image_dimensions().is_none() {
        return Err(AnnotationError::NoImageLoaded);
    }
    if !p.is_finite() {
        return Err(AnnotationError::InvalidGeometry);
    }
    let screen = viewer.viewport_to_window(viewer.image_to_viewport(p));
    if !screen.is_finite() {
        return Err(AnnotationError::InvalidGeometry);
    }
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::PanZoomViewer;
    use kurbo::Size;

    fn open_viewer() -> PanZoomViewer {
        let mut viewer = PanZoomViewer::default();
        viewer.open(Size::new(2000.0, 1500.0));
        viewer
    }

    #[test]
    fn test_roundtrip() {
        let viewer = open_viewer();
        let screen = ScreenPoint::new(123.0, 456.0);
        let image = screen_to_image(&viewer, screen).unwrap();
        let back = image_to_screen(&viewer, image).unwrap();
        assert!((back.x() - screen.x()).abs() < 1e-9);
        assert!((back.y() - screen.y()).abs() < 1e-9);
    }

    #[test]
    fn test_no_image_is_an_error() {
        let viewer = PanZoomViewer::default();
        assert_eq!(
            screen_to_image(&viewer, ScreenPoint::new(10.0, 10.0)),
            Err(AnnotationError::NoImageLoaded)
        );
        assert_eq!(
            image_to_screen(&viewer, ImagePoint::new(10.0, 10.0)),
            Err(AnnotationError::NoImageLoaded)
        );
    }

    #[test]
    fn test_non_finite_input_is_an_error() {
        let viewer = open_viewer();
        assert_eq!(
            screen_to_image(&viewer, ScreenPoint::new(f64::NAN, 0.0)),
            Err(AnnotationError::InvalidGeometry)
        );
    }

    #[test]
    fn test_stored_point_survives_zoom_change() {
        let mut viewer = open_viewer();
        let image = screen_to_image(&viewer, ScreenPoint::new(500.0, 400.0)).unwrap();

        viewer.zoom_at(ScreenPoint::new(200.0, 200.0), 3.0);
        viewer.pan_by(kurbo::Vec2::new(0.25, 0.1));

        // Re-projecting at the new view and converting back must land
        // on the identical image pixel.
        let screen_now = image_to_screen(&viewer, image).unwrap();
        let back = screen_to_image(&viewer, screen_now).unwrap();
        assert!((back.x() - image.x()).abs() < 1e-6);
        assert!((back.y() - image.y()).abs() < 1e-6);
    }
}
