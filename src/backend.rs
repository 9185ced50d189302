//! Rendering boundary: the only interface the canvas paints through.
//!
//! The canvas owns WHAT is on the surface (drawables, their frames,
//! transforms, and styling) while a [`RenderBackend`] implementation
//! owns HOW that is painted, wrapping the host toolkit's layer or view
//! machinery. Backend calls are infallible by contract: paint failures
//! belong to the host, not to the canvas.
//!
//! Animated changes carry a [`Transition`]. The logical mutation always
//! commits synchronously on the canvas side; the backend interpolates
//! only the visual result, fire-and-forget. A second transition on the
//! same visual retargets the in-flight one; last write wins on the
//! target values.

use serde::{Deserialize, Serialize};

use crate::consts::TRANSITION_SECS;
use crate::drawable::Color;
use crate::geom::{Affine, ScreenRect, ScreenSize};

/// Backend-minted handle to one visual on the paint surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(pub u64);

/// Timing for an animated visual change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Self { duration_secs: TRANSITION_SECS, delay_secs: 0.0 }
    }
}

/// Drop-shadow parameters converted to screen units, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowSpec {
    /// Horizontal offset in screen points.
    pub offset_x: f64,
    /// Vertical offset in screen points, positive pointing down.
    pub offset_y: f64,
    /// Blur radius in screen points.
    pub blur_radius: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub color: Color,
}

/// The paint surface consumed by [`crate::canvas::Canvas`].
pub trait RenderBackend {
    /// Create a visual with the given initial size in screen points.
    /// Frame, silhouette, and styling calls follow.
    fn create_visual(&mut self, size: ScreenSize) -> VisualId;

    /// Position and size a visual in screen space.
    fn set_frame(&mut self, visual: VisualId, frame: ScreenRect);

    /// Replace a visual's transform. `Some(transition)` asks the backend
    /// to interpolate from the previous transform over that timing.
    fn set_transform(&mut self, visual: VisualId, transform: Affine, transition: Option<Transition>);

    /// Apply or clear a drop-shadow.
    fn set_shadow(&mut self, visual: VisualId, shadow: Option<ShadowSpec>);

    /// Round the visual's corners. `radius` is in screen points; a
    /// circle is its frame with radius = half the frame's min dimension.
    fn set_corner_radius(&mut self, visual: VisualId, radius: f64);

    /// Fill color of the visual.
    fn set_fill(&mut self, visual: VisualId, color: Color);

    /// Border stroke. `width` is in screen points; zero clears it.
    fn set_border(&mut self, visual: VisualId, width: f64, color: Color);

    /// Move the visual above every other visual on the surface.
    fn bring_to_front(&mut self, visual: VisualId);

    /// Detach and destroy the visual.
    fn remove_visual(&mut self, visual: VisualId);

    /// Background color of the whole surface.
    fn set_background(&mut self, color: Color);

    /// Toggle the background alignment grid.
    fn set_grid_visible(&mut self, visible: bool);
}
