//! Clamping image-space points to the loaded image rectangle.

use kurbo::Size;

use crate::space::ImagePoint;

/// Clamp a point to `[0, width] × [0, height]` of the image.
///
/// Applied to every pointer sample before it reaches a shape builder,
/// so committed geometry can never extend outside the image even when
/// the pointer does. Circle radii are deliberately not clamped against
/// the image edges; only sampled points are.
pub fn clamp(p: ImagePoint, image_size: Size) -> ImagePoint {
    ImagePoint::new(
        p.x().clamp(0.0, image_size.width),
        p.y().clamp(0.0, image_size.height),
    )
}
