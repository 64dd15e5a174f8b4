//! The deep-zoom viewer collaborator contract.
//!
//! The tile-rendering/navigation engine is not part of this crate; the
//! core consumes it through the [`Viewer`] trait and reacts to its
//! [`ViewerEvent`] stream. [`PanZoomViewer`] is a reference
//! implementation backed by a plain offset+zoom transform, used by
//! tests and embedders that do not bring their own engine.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::space::{ImagePoint, ScreenPoint, ViewportPoint};

/// Events emitted by the viewer. All are payload-free "recompute now"
/// signals as far as the core is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// An image finished opening. Image dimensions are valid from now on.
    Open,
    /// The viewer's display surface was resized.
    Resize,
    /// Pan or zoom changed the visible region.
    ViewportChange,
}

/// Coordinate-space and navigation primitives the core needs from a
/// deep-zoom engine.
///
/// Conversions must reflect the viewer's *current* projection on every
/// call; the core never caches them.
pub trait Viewer {
    /// Convert raw pointer pixels to viewport coordinates.
    fn window_to_viewport(&self, p: ScreenPoint) -> ViewportPoint;

    /// Convert viewport coordinates back to raw pixels.
    fn viewport_to_window(&self, p: ViewportPoint) -> ScreenPoint;

    /// Convert viewport coordinates to image pixels.
    fn viewport_to_image(&self, p: ViewportPoint) -> ImagePoint;

    /// Convert image pixels to viewport coordinates.
    fn image_to_viewport(&self, p: ImagePoint) -> ViewportPoint;

    /// Current zoom level.
    fn zoom(&self) -> f64;

    /// Pan by a delta expressed in viewport units.
    fn pan_by(&mut self, delta: Vec2);

    /// Native pixel dimensions of the loaded image, or `None` before
    /// an image is open.
    fn image_dimensions(&self) -> Option<Size>;

    /// Screen-space rectangle the viewer currently occupies. The
    /// annotation overlay is sized to cover exactly this region.
    fn display_region(&self) -> Rect;
}

/// Deep-zoom tile source and gesture settings handed to the viewer at
/// initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Base URL of the tile pyramid.
    pub tile_url: String,
    /// Tile image format (e.g. "jpg").
    pub tile_format: String,
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Tile overlap in pixels.
    pub overlap: u32,
    /// Native size of the full-resolution image.
    pub image_size: Size,
    /// Smallest allowed zoom level.
    pub min_zoom: f64,
    /// Zoom level applied when an image opens.
    pub default_zoom: f64,
    /// Two-finger pinch zooming.
    pub pinch_to_zoom: bool,
    /// Tap/click zooming (disabled so taps reach the drawing tools).
    pub click_to_zoom: bool,
    /// Wheel zooming (disabled so scrolling reaches the page).
    pub scroll_to_zoom: bool,
    /// Show the navigator thumbnail widget.
    pub show_navigator: bool,
}

impl Default for ViewerConfig {
    /// The demo deep-zoom image (Milan cathedral pyramid).
    fn default() -> Self {
        Self {
            tile_url: "//openseadragon.github.io/example-images/duomo/duomo_files/".to_string(),
            tile_format: "jpg".to_string(),
            tile_size: 256,
            overlap: 2,
            image_size: Size::new(13920.0, 10200.0),
            min_zoom: 1.0,
            default_zoom: 1.0,
            pinch_to_zoom: true,
            click_to_zoom: false,
            scroll_to_zoom: false,
            show_navigator: true,
        }
    }
}

/// Reference [`Viewer`] backed by an offset+zoom transform.
///
/// Viewport space is normalized so the image width spans one viewport
/// unit at zoom 1; screen space maps the display region's width onto
/// one viewport unit. This mirrors how deep-zoom engines normalize
/// their viewports and keeps all three spaces genuinely distinct.
#[derive(Debug, Clone)]
pub struct PanZoomViewer {
    /// Viewport-space translation of the image origin.
    offset: Vec2,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    display: Rect,
    image: Option<Size>,
}

impl PanZoomViewer {
    pub fn new(display: Rect) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 40.0,
            display,
            image: None,
        }
    }

    /// Open an image with the given native dimensions, resetting pan
    /// and zoom. The caller is expected to follow up with
    /// [`ViewerEvent::Open`] on whatever bridge is listening.
    pub fn open(&mut self, image_size: Size) {
        self.image = Some(image_size);
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }

    /// Resize the display region (screen-space rectangle).
    pub fn set_display_region(&mut self, display: Rect) {
        self.display = display;
    }

    /// Zoom by `factor`, keeping `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let pivot = self.viewport_to_image(self.window_to_viewport(anchor));
        self.zoom = new_zoom;
        let drifted = self.image_to_viewport(pivot);
        let target = self.window_to_viewport(anchor);
        self.offset += drifted.delta_to(target);
    }

    fn image_width(&self) -> f64 {
        // NaN when nothing is loaded; conversions feed the finiteness
        // checks in transform rather than panicking.
        self.image.map_or(f64::NAN, |s| s.width)
    }
}

impl Viewer for PanZoomViewer {
    fn window_to_viewport(&self, p: ScreenPoint) -> ViewportPoint {
        ViewportPoint::new(
            (p.x() - self.display.x0) / self.display.width(),
            (p.y() - self.display.y0) / self.display.width(),
        )
    }

    fn viewport_to_window(&self, p: ViewportPoint) -> ScreenPoint {
        ScreenPoint::new(
            self.display.x0 + p.x() * self.display.width(),
            self.display.y0 + p.y() * self.display.width(),
        )
    }

    fn viewport_to_image(&self, p: ViewportPoint) -> ImagePoint {
        let scale = self.image_width() / self.zoom;
        ImagePoint::new((p.x() - self.offset.x) * scale, (p.y() - self.offset.y) * scale)
    }

    fn image_to_viewport(&self, p: ImagePoint) -> ViewportPoint {
        let scale = self.zoom / self.image_width();
        ViewportPoint::new(self.offset.x + p.x() * scale, self.offset.y + p.y() * scale)
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    fn image_dimensions(&self) -> Option<Size> {
        self.image
    }

    fn display_region(&self) -> Rect {
        self.display
    }
}

impl Default for PanZoomViewer {
    fn default() -> Self {
        Self::new(Rect::from_origin_size(Point::ZERO, Size::new(1000.0, 800.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_viewer() -> PanZoomViewer {
        let mut viewer = PanZoomViewer::default();
        viewer.open(Size::new(1000.0, 800.0));
        viewer
    }

    #[test]
    fn test_screen_image_roundtrip() {
        let viewer = open_viewer();
        let screen = ScreenPoint::new(321.0, 456.0);
        let image = viewer.viewport_to_image(viewer.window_to_viewport(screen));
        let back = viewer.viewport_to_window(viewer.image_to_viewport(image));
        assert!((back.x() - screen.x()).abs() < 1e-9);
        assert!((back.y() - screen.y()).abs() < 1e-9);
    }

    #[test]
    fn test_image_point_invariant_under_pan() {
        let mut viewer = open_viewer();
        let image = ImagePoint::new(250.0, 125.0);
        let before = viewer.image_to_viewport(image);
        viewer.pan_by(Vec2::new(0.3, -0.1));
        let after = viewer.image_to_viewport(image);
        // The projection moved with the pan...
        assert!((after.x() - before.x() - 0.3).abs() < 1e-12);
        // ...and converting back still lands on the same image pixel.
        let back = viewer.viewport_to_image(after);
        assert!((back.x() - image.x()).abs() < 1e-9);
        assert!((back.y() - image.y()).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_at_keeps_anchor_fixed() {
        let mut viewer = open_viewer();
        let anchor = ScreenPoint::new(400.0, 300.0);
        let pinned = viewer.viewport_to_image(viewer.window_to_viewport(anchor));
        viewer.zoom_at(anchor, 2.5);
        let after = viewer.viewport_to_image(viewer.window_to_viewport(anchor));
        assert!((after.x() - pinned.x()).abs() < 1e-6);
        assert!((after.y() - pinned.y()).abs() < 1e-6);
    }

    #[test]
    fn test_no_image_yields_non_finite() {
        let viewer = PanZoomViewer::default();
        assert!(viewer.image_dimensions().is_none());
        let p = viewer.viewport_to_image(ViewportPoint::new(0.5, 0.5));
        assert!(!p.is_finite());
    }

    #[test]
    fn test_default_config_is_demo_pyramid() {
        let config = ViewerConfig::default();
        assert_eq!(config.tile_size, 256);
        assert!((config.image_size.width - 13920.0).abs() < f64::EPSILON);
        assert!(config.pinch_to_zoom);
        assert!(!config.click_to_zoom);
    }
}
