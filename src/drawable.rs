//! Drawable model: shapes, styling value types, and per-drawable state.
//!
//! A [`Drawable`] is anything placeable on the canvas. Concrete shapes
//! are variants of [`Shape`]; the canvas owns every drawable exclusively
//! and keys all mutation by [`DrawableId`]. Geometry is stored as a
//! screen-space anchor (the visual center) so a viewport recenter only
//! has to shift anchors; the model-space center is derived through the
//! canvas's [`CoordinateSpace`].

#[cfg(test)]
#[path = "drawable_test.rs"]
mod drawable_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::VisualId;
use crate::consts::DEFAULT_RADIUS;
use crate::geom::{Affine, Point, ScreenPoint, ScreenRect, Size};
use crate::space::CoordinateSpace;
use crate::touch::TouchHandlers;

/// Unique identifier for a drawable.
pub type DrawableId = Uuid;

/// Concrete shape of a drawable. Extents are in model units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Circle of the given radius.
    Circle { radius: f64 },
    /// Rectangle with optional rounded corners.
    Rect { size: Size, corner_radius: f64 },
}

impl Shape {
    /// Bounding extent in model units. A circle's is `(2r, 2r)`.
    #[must_use]
    pub fn model_size(&self) -> Size {
        match *self {
            Self::Circle { radius } => Size::new(radius * 2.0, radius * 2.0),
            Self::Rect { size, .. } => size,
        }
    }

    /// Corner radius of the screen silhouette, in screen points. A
    /// circle is its bounding square rounded by its full radius.
    pub(crate) fn corner_radius_screen(&self, space: &CoordinateSpace) -> f64 {
        match *self {
            Self::Circle { radius } => space.magnitude_to_screen(radius),
            Self::Rect { corner_radius, .. } => space.magnitude_to_screen(corner_radius),
        }
    }
}

impl Default for Shape {
    /// A circle of [`DEFAULT_RADIUS`].
    fn default() -> Self {
        Self::Circle { radius: DEFAULT_RADIUS }
    }
}

/// An opaque CSS-style color value. The canvas never inspects it; it is
/// carried to the backend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub String);

impl Color {
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// Default ink.
    #[must_use]
    pub fn black() -> Self {
        Self::new("#1F1A17")
    }

    /// Fully transparent.
    #[must_use]
    pub fn clear() -> Self {
        Self::new("transparent")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Border (stroke) styling for a drawable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Stroke width in model units. Never negative.
    pub width: f64,
    pub color: Color,
}

/// Drop-shadow styling. `offset` is a model-space vector from the
/// drawable to its shadow (positive Y is up, like every model vector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset: Point,
    /// Blur radius in model units. Never negative.
    pub blur_radius: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub color: Color,
}

/// Drag context captured at pointer-down on a draggable drawable.
/// Present only between that down and its up/cancel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragState {
    /// Captured as `touch − center` in model space. The drag invariant
    /// is `center = touch − offset` after every move.
    pub offset: Point,
}

/// One drawable on the canvas.
///
/// All fields are mutated through [`crate::canvas::Canvas`], which owns
/// the drawable and pairs every logical change with the matching
/// backend call. `press_scale` / `press_rotation` hold the transient
/// pressed-state feedback and never leak into the logical `scale` and
/// `rotation`.
pub struct Drawable {
    pub(crate) id: DrawableId,
    pub(crate) visual: VisualId,
    pub(crate) shape: Shape,
    pub(crate) anchor: ScreenPoint,
    pub(crate) scale: f64,
    pub(crate) rotation: f64,
    pub(crate) press_scale: f64,
    pub(crate) press_rotation: f64,
    pub(crate) shadow: Option<Shadow>,
    pub(crate) fill: Color,
    pub(crate) border: Option<Border>,
    pub(crate) draggable: bool,
    pub(crate) handlers: TouchHandlers,
    pub(crate) drag: Option<DragState>,
}

impl Drawable {
    pub(crate) fn new(id: DrawableId, visual: VisualId, shape: Shape, anchor: ScreenPoint) -> Self {
        Self {
            id,
            visual,
            shape,
            anchor,
            scale: 1.0,
            rotation: 0.0,
            press_scale: 1.0,
            press_rotation: 0.0,
            shadow: None,
            fill: Color::default(),
            border: None,
            draggable: false,
            handlers: TouchHandlers::default(),
            drag: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> DrawableId {
        self.id
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation in radians, counter-clockwise positive.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn shadow(&self) -> Option<&Shadow> {
        self.shadow.as_ref()
    }

    #[must_use]
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    #[must_use]
    pub fn border(&self) -> Option<&Border> {
        self.border.as_ref()
    }

    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Whether this drawable accepts a pointer-down at all: it is
    /// draggable, or at least one handler is registered.
    #[must_use]
    pub fn wants_touch(&self) -> bool {
        self.draggable || self.handlers.any_registered()
    }

    /// Model-space center, derived from the screen anchor.
    #[must_use]
    pub fn center(&self, space: &CoordinateSpace) -> Point {
        space.to_model(self.anchor)
    }

    /// Screen frame: the untransformed bounding box centered on the
    /// anchor. Also the containment test used for touch routing.
    #[must_use]
    pub fn frame(&self, space: &CoordinateSpace) -> ScreenRect {
        ScreenRect::centered_at(self.anchor, space.size_to_screen(self.shape.model_size()))
    }

    /// Combined visual transform: scale applied before rotation, with
    /// the transient press feedback folded in. The angle is negated
    /// because rotation is CCW-positive in model space while screen Y
    /// points down.
    #[must_use]
    pub fn visual_transform(&self) -> Affine {
        let scale = self.scale * self.press_scale;
        let rotation = self.rotation + self.press_rotation;
        Affine::scale(scale).then(Affine::rotation(-rotation))
    }
}

impl fmt::Debug for Drawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawable")
            .field("id", &self.id)
            .field("shape", &self.shape)
            .field("anchor", &self.anchor)
            .field("scale", &self.scale)
            .field("rotation", &self.rotation)
            .field("draggable", &self.draggable)
            .field("handlers", &self.handlers)
            .field("dragging", &self.drag.is_some())
            .finish_non_exhaustive()
    }
}
