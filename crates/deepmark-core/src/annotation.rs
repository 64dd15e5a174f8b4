//! The persisted annotation data model.

use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shapes::{Geometry, ShapeKind};

/// Unique identifier for annotations. Random v4 ids are collision-free
/// within a session without any shared counter.
pub type AnnotationId = Uuid;

/// Serializable RGBA8 color that round-trips through the `#RRGGBB` /
/// `#RRGGBBAA` hex notation used at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke style applied to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Rgba,
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Rgba::red(),
            stroke_width: 2.0,
        }
    }
}

/// Whether an annotation is in-progress scaffolding or committed.
///
/// Temp annotations exist only while a gesture is active and are never
/// exposed outside the drawing state machine; at most one exists at
/// any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Temp,
    Committed,
}

/// A committed (or in-progress) shape drawn over the image.
///
/// Geometry is always image-space, so a stored annotation never
/// changes when the viewer pans or zooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub geometry: Geometry,
    pub style: Style,
    pub label: Option<String>,
    pub lifecycle: Lifecycle,
}

impl Annotation {
    /// Create a committed annotation with a fresh id.
    pub fn committed(geometry: Geometry, style: Style) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            style,
            label: None,
            lifecycle: Lifecycle::Committed,
        }
    }

    /// Create a temp annotation under an existing gesture id.
    pub fn temp(id: AnnotationId, geometry: Geometry, style: Style) -> Self {
        Self {
            id,
            geometry,
            style,
            label: None,
            lifecycle: Lifecycle::Temp,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn is_temp(&self) -> bool {
        self.lifecycle == Lifecycle::Temp
    }
}
