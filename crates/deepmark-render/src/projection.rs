//! Re-projects image-space annotations to screen space.
//!
//! Stored geometry never changes with the view; this module computes
//! the current on-screen footprint from the viewer's live projection,
//! once per rendered frame.

use deepmark_core::annotation::{Annotation, AnnotationId, Style};
use deepmark_core::error::AnnotationResult;
use deepmark_core::shapes::Geometry;
use deepmark_core::space::{ImagePoint, ScreenPoint};
use deepmark_core::transform;
use deepmark_core::viewer::Viewer;
use log::debug;

/// A screen-space primitive ready for whatever drawing backend the
/// application uses.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenShape {
    Segment {
        start: ScreenPoint,
        end: ScreenPoint,
    },
    Rect {
        origin: ScreenPoint,
        width: f64,
        height: f64,
    },
    Circle {
        center: ScreenPoint,
        radius: f64,
    },
    Polyline {
        points: Vec<ScreenPoint>,
    },
    /// A single-sample freehand path.
    Dot {
        at: ScreenPoint,
    },
}

/// One annotation projected into the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedAnnotation {
    pub id: AnnotationId,
    pub shape: ScreenShape,
    pub style: Style,
    pub label: Option<String>,
}

/// Project one annotation through the viewer's current transform.
pub fn project(annotation: &Annotation, viewer: &dyn Viewer) -> AnnotationResult<ProjectedAnnotation> {
    let to_screen = |p: ImagePoint| transform::image_to_screen(viewer, p);

    let shape = match &annotation.geometry {
        Geometry::Line(line) => ScreenShape::Segment {
            start: to_screen(line.start)?,
            end: to_screen(line.end)?,
        },
        Geometry::Rectangle(rect) => {
            let origin = to_screen(rect.origin)?;
            let far = to_screen(ImagePoint::new(
                rect.origin.x() + rect.width,
                rect.origin.y() + rect.height,
            ))?;
            ScreenShape::Rect {
                origin,
                width: far.x() - origin.x(),
                height: far.y() - origin.y(),
            }
        }
        Geometry::Circle(circle) => {
            let center = to_screen(circle.center)?;
            // Measure the radius by projecting a rim point, so any
            // viewer projection (not just uniform zoom) is handled.
            let rim = to_screen(ImagePoint::new(
                circle.center.x() + circle.radius,
                circle.center.y(),
            ))?;
            ScreenShape::Circle {
                center,
                radius: center.distance(rim),
            }
        }
        Geometry::Freehand(path) if path.is_dot() => ScreenShape::Dot {
            at: to_screen(path.points[0])?,
        },
        Geometry::Freehand(path) => {
            let points = path
                .points
                .iter()
                .map(|p| to_screen(*p))
                .collect::<AnnotationResult<Vec<_>>>()?;
            ScreenShape::Polyline { points }
        }
    };

    Ok(ProjectedAnnotation {
        id: annotation.id,
        shape,
        style: annotation.style.clone(),
        label: annotation.label.clone(),
    })
}

/// Project a set of annotations, skipping any that fail (e.g. during
/// the window between a teardown and the next image opening). Errors
/// are recovered here, never surfaced to the render loop.
pub fn project_all<'a, I>(annotations: I, viewer: &dyn Viewer) -> Vec<ProjectedAnnotation>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    annotations
        .into_iter()
        .filter_map(|annotation| match project(annotation, viewer) {
            Ok(projected) => Some(projected),
            Err(err) => {
                debug!("skipping annotation {}: {err}", annotation.id);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepmark_core::shapes::{Circle, Freehand, Line, Rectangle};
    use deepmark_core::viewer::PanZoomViewer;
    use kurbo::{Rect, Size};

    fn identity_viewer() -> PanZoomViewer {
        let mut viewer = PanZoomViewer::new(Rect::new(0.0, 0.0, 1000.0, 800.0));
        viewer.open(Size::new(1000.0, 800.0));
        viewer
    }

    fn committed(geometry: Geometry) -> Annotation {
        Annotation::committed(geometry, Style::default())
    }

    #[test]
    fn test_circle_radius_scales_with_zoom() {
        let mut viewer = identity_viewer();
        let annotation = committed(Geometry::Circle(Circle::new(
            ImagePoint::new(200.0, 200.0),
            50.0,
        )));

        let at_1x = project(&annotation, &viewer).unwrap();
        viewer.zoom_at(ScreenPoint::new(0.0, 0.0), 2.0);
        let at_2x = project(&annotation, &viewer).unwrap();

        match (at_1x.shape, at_2x.shape) {
            (
                ScreenShape::Circle { radius: r1, .. },
                ScreenShape::Circle { radius: r2, .. },
            ) => {
                assert!((r1 - 50.0).abs() < 1e-9);
                assert!((r2 - 100.0).abs() < 1e-9);
            }
            other => panic!("unexpected shapes: {other:?}"),
        }
    }

    #[test]
    fn test_rectangle_projection_tracks_pan() {
        let mut viewer = identity_viewer();
        let annotation = committed(Geometry::Rectangle(Rectangle::from_corners(
            ImagePoint::new(10.0, 10.0),
            ImagePoint::new(60.0, 40.0),
        )));

        viewer.pan_by(kurbo::Vec2::new(0.1, 0.0)); // 100 screen px right
        let projected = project(&annotation, &viewer).unwrap();
        match projected.shape {
            ScreenShape::Rect {
                origin,
                width,
                height,
            } => {
                assert!((origin.x() - 110.0).abs() < 1e-9);
                assert!((origin.y() - 10.0).abs() < 1e-9);
                assert!((width - 50.0).abs() < 1e-9);
                assert!((height - 30.0).abs() < 1e-9);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_single_point_freehand_projects_as_dot() {
        let viewer = identity_viewer();
        let annotation = committed(Geometry::Freehand(Freehand::from_points(vec![
            ImagePoint::new(5.0, 6.0),
        ])));
        match project(&annotation, &viewer).unwrap().shape {
            ScreenShape::Dot { at } => {
                assert!((at.x() - 5.0).abs() < 1e-9);
                assert!((at.y() - 6.0).abs() < 1e-9);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_project_all_recovers_when_no_image() {
        let viewer = PanZoomViewer::default(); // nothing open
        let annotations = vec![committed(Geometry::Line(Line::new(
            ImagePoint::ZERO,
            ImagePoint::new(1.0, 1.0),
        )))];
        assert!(project_all(annotations.iter(), &viewer).is_empty());
    }

    #[test]
    fn test_roundtrip_through_two_zoom_levels() {
        // Committed at Z1, projected at Z2 and converted back: the
        // image-space geometry must not drift.
        let mut viewer = identity_viewer();
        let original = ImagePoint::new(333.0, 444.0);
        viewer.zoom_at(ScreenPoint::new(100.0, 100.0), 5.0);

        let screen = transform::image_to_screen(&viewer, original).unwrap();
        let back = transform::screen_to_image(&viewer, screen).unwrap();
        assert!((back.x() - original.x()).abs() < 1e-6);
        assert!((back.y() - original.y()).abs() < 1e-6);
    }
}
