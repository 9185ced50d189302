//! The canvas: root container and single writer for the whole surface.
//!
//! DESIGN
//! ======
//! The canvas owns the drawable list (back-to-front paint order; the
//! last entry is topmost), the coordinate space, and the touch routing
//! state. Every mutation (property setters, pointer events, viewport
//! resizes) goes through `&mut Canvas` on one logical thread and runs
//! to completion before the next event; the only asynchronous effect is
//! the backend's visual interpolation, which is fire-and-forget.
//!
//! Geometry is stored as screen anchors and presented in model units.
//! A viewport resize recenters the coordinate space and shifts every
//! anchor by the same delta, so model-space centers never move.
//!
//! ERROR HANDLING
//! ==============
//! Invalid geometry (negative radius, scale, blur, border width,
//! opacity outside `[0, 1]`, non-finite input) is rejected at the
//! setter boundary with [`CanvasError::InvalidArgument`], never
//! clamped. Operations on ids not on the canvas, including `remove`,
//! return [`CanvasError::NotFound`]. Touch events with no interested
//! target are silently dropped; an unchanged-bounds resize is a no-op.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use std::collections::BTreeMap;

use tracing::{debug, trace};
use uuid::Uuid;

use crate::backend::{RenderBackend, ShadowSpec, Transition};
use crate::consts::{POINTS_PER_UNIT, PRESS_ROTATION, PRESS_SCALE};
use crate::drawable::{Border, Color, DragState, Drawable, DrawableId, Shadow, Shape};
use crate::error::CanvasError;
use crate::geom::{Point, ScreenPoint, ScreenSize, Size};
use crate::space::CoordinateSpace;
use crate::touch::{TouchHandlers, TouchId, TouchSample, TouchState, TouchTarget};

/// How an active touch stream ended.
#[derive(Debug, Clone, Copy)]
enum StreamEnd {
    Up,
    Cancelled,
}

/// The root drawing surface.
pub struct Canvas {
    backend: Box<dyn RenderBackend>,
    space: CoordinateSpace,
    viewport: ScreenSize,
    drawables: Vec<Drawable>,
    background: Color,
    grid_visible: bool,
    handlers: TouchHandlers,
    touch: TouchState,
    active_touches: BTreeMap<TouchId, ScreenPoint>,
}

impl Canvas {
    /// Create a canvas over `backend` with the given viewport, at the
    /// default scale of [`POINTS_PER_UNIT`] screen points per model unit.
    #[must_use]
    pub fn new(backend: Box<dyn RenderBackend>, viewport: ScreenSize) -> Self {
        Self::with_points_per_unit(backend, viewport, POINTS_PER_UNIT)
    }

    /// Create a canvas with a custom scale factor.
    #[must_use]
    pub fn with_points_per_unit(
        mut backend: Box<dyn RenderBackend>,
        viewport: ScreenSize,
        points_per_unit: f64,
    ) -> Self {
        let mut space = CoordinateSpace::new(points_per_unit);
        space.recenter(viewport_center(viewport));
        let background = Color::clear();
        backend.set_background(background.clone());
        Self {
            backend,
            space,
            viewport,
            drawables: Vec::new(),
            background,
            grid_visible: false,
            handlers: TouchHandlers::default(),
            touch: TouchState::Idle,
            active_touches: BTreeMap::new(),
        }
    }

    // --- Queries ---

    /// Number of drawables on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Returns `true` if the canvas holds no drawables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Drawable ids in back-to-front paint order; the last is topmost.
    #[must_use]
    pub fn ids(&self) -> Vec<DrawableId> {
        self.drawables.iter().map(Drawable::id).collect()
    }

    /// Look up a drawable by id.
    #[must_use]
    pub fn drawable(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.iter().find(|d| d.id == id)
    }

    /// The model↔screen mapping currently in effect.
    #[must_use]
    pub fn coordinate_space(&self) -> &CoordinateSpace {
        &self.space
    }

    /// Current viewport converted to model units.
    #[must_use]
    pub fn visible_size(&self) -> Size {
        self.space.size_to_model(self.viewport)
    }

    /// All currently active touch points in model space, in touch-id
    /// order. Empty when no touch is down.
    #[must_use]
    pub fn current_touch_points(&self) -> Vec<Point> {
        self.active_touches.values().map(|&screen| self.space.to_model(screen)).collect()
    }

    #[must_use]
    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    #[must_use]
    pub fn background(&self) -> &Color {
        &self.background
    }

    /// Model-space center of a drawable.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn center(&self, id: DrawableId) -> Result<Point, CanvasError> {
        let drawable = self.drawable(id).ok_or(CanvasError::NotFound(id))?;
        Ok(drawable.center(&self.space))
    }

    // --- Lifecycle ---

    /// Add a circle of `radius` model units, centered at the model
    /// origin and topmost. Returns its id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `radius` is negative or not finite.
    pub fn add_circle(&mut self, radius: f64) -> Result<DrawableId, CanvasError> {
        ensure_non_negative("radius", radius)?;
        Ok(self.add_shape(Shape::Circle { radius }))
    }

    /// Add a rectangle of `size` model units, centered at the model
    /// origin and topmost. Returns its id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either extent is negative or not
    /// finite.
    pub fn add_rect(&mut self, size: Size) -> Result<DrawableId, CanvasError> {
        ensure_non_negative("width", size.width)?;
        ensure_non_negative("height", size.height)?;
        Ok(self.add_shape(Shape::Rect { size, corner_radius: 0.0 }))
    }

    fn add_shape(&mut self, shape: Shape) -> DrawableId {
        let visual = self.backend.create_visual(self.space.size_to_screen(shape.model_size()));
        let drawable = Drawable::new(Uuid::new_v4(), visual, shape, self.space.center_offset());
        self.backend.set_frame(visual, drawable.frame(&self.space));
        self.backend.set_corner_radius(visual, shape.corner_radius_screen(&self.space));
        self.backend.set_fill(visual, drawable.fill.clone());
        let id = drawable.id;
        self.drawables.push(drawable);
        debug!(%id, ?shape, "drawable added");
        id
    }

    /// Remove a drawable, detaching its visual.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn remove(&mut self, id: DrawableId) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        let drawable = self.drawables.remove(index);
        self.backend.remove_visual(drawable.visual);
        if let TouchState::Active { target: TouchTarget::Drawable(active), .. } = self.touch {
            if active == id {
                self.touch = TouchState::Idle;
            }
        }
        debug!(%id, "drawable removed");
        Ok(())
    }

    /// Remove every drawable, detaching all visuals. Idempotent.
    pub fn clear(&mut self) {
        for drawable in self.drawables.drain(..) {
            self.backend.remove_visual(drawable.visual);
        }
        if matches!(self.touch, TouchState::Active { target: TouchTarget::Drawable(_), .. }) {
            self.touch = TouchState::Idle;
        }
        debug!("canvas cleared");
    }

    // --- Viewport ---

    /// React to a viewport change. A no-op when the bounds are
    /// unchanged.
    ///
    /// Recenters the coordinate space on the new visual center and
    /// shifts every drawable's screen anchor by the same delta, so
    /// model-space centers are preserved across the resize.
    pub fn on_viewport_resize(&mut self, viewport: ScreenSize) {
        if viewport == self.viewport {
            return;
        }
        let delta = viewport_center(viewport) - self.space.center_offset();
        self.viewport = viewport;
        self.space.recenter(viewport_center(viewport));
        for drawable in &mut self.drawables {
            drawable.anchor = drawable.anchor + delta;
            self.backend.set_frame(drawable.visual, drawable.frame(&self.space));
        }
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
    }

    // --- Properties ---

    /// Move a drawable to a model-space center.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn set_center(&mut self, id: DrawableId, center: Point) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        let drawable = &mut self.drawables[index];
        drawable.anchor = self.space.to_screen(center);
        self.backend.set_frame(drawable.visual, drawable.frame(&self.space));
        Ok(())
    }

    /// Set the uniform scale of a drawable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for negative or non-finite values, and
    /// `NotFound` for an unknown id.
    pub fn set_scale(&mut self, id: DrawableId, scale: f64) -> Result<(), CanvasError> {
        ensure_non_negative("scale", scale)?;
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        let drawable = &mut self.drawables[index];
        drawable.scale = scale;
        self.backend.set_transform(drawable.visual, drawable.visual_transform(), None);
        Ok(())
    }

    /// Set the rotation in radians, counter-clockwise positive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for non-finite values and `NotFound`
    /// for an unknown id.
    pub fn set_rotation(&mut self, id: DrawableId, rotation: f64) -> Result<(), CanvasError> {
        ensure_finite("rotation", rotation)?;
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        let drawable = &mut self.drawables[index];
        drawable.rotation = rotation;
        self.backend.set_transform(drawable.visual, drawable.visual_transform(), None);
        Ok(())
    }

    /// Apply or clear a drop-shadow. `None` clears.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative blur radius or an
    /// opacity outside `[0, 1]`, and `NotFound` for an unknown id.
    pub fn set_shadow(&mut self, id: DrawableId, shadow: Option<Shadow>) -> Result<(), CanvasError> {
        if let Some(ref s) = shadow {
            ensure_non_negative("shadow blur radius", s.blur_radius)?;
            ensure_unit_interval("shadow opacity", s.opacity)?;
        }
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        let spec = shadow.as_ref().map(|s| self.shadow_spec(s));
        let drawable = &mut self.drawables[index];
        drawable.shadow = shadow;
        self.backend.set_shadow(drawable.visual, spec);
        Ok(())
    }

    /// Set the fill color.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn set_fill(&mut self, id: DrawableId, color: Color) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        let drawable = &mut self.drawables[index];
        drawable.fill = color.clone();
        self.backend.set_fill(drawable.visual, color);
        Ok(())
    }

    /// Apply or clear the border. `None` clears.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative width and `NotFound`
    /// for an unknown id.
    pub fn set_border(&mut self, id: DrawableId, border: Option<Border>) -> Result<(), CanvasError> {
        if let Some(ref b) = border {
            ensure_non_negative("border width", b.width)?;
        }
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        let (width, color) = match border {
            Some(ref b) => (self.space.magnitude_to_screen(b.width), b.color.clone()),
            None => (0.0, Color::clear()),
        };
        let drawable = &mut self.drawables[index];
        drawable.border = border;
        self.backend.set_border(drawable.visual, width, color);
        Ok(())
    }

    /// Toggle whether the drawable participates in drag interaction and
    /// receives pointer events.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn set_draggable(&mut self, id: DrawableId, draggable: bool) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        self.drawables[index].draggable = draggable;
        Ok(())
    }

    /// Set a circle's radius, resizing its visual while preserving the
    /// current center.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative radius, `ShapeMismatch`
    /// if the drawable is not a circle, and `NotFound` for an unknown
    /// id.
    pub fn set_radius(&mut self, id: DrawableId, radius: f64) -> Result<(), CanvasError> {
        ensure_non_negative("radius", radius)?;
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        match self.drawables[index].shape {
            Shape::Circle { .. } => {
                self.drawables[index].shape = Shape::Circle { radius };
                self.reframe(index);
                Ok(())
            }
            Shape::Rect { .. } => Err(CanvasError::ShapeMismatch { id, expected: "circle" }),
        }
    }

    /// Set a rectangle's extent, resizing its visual while preserving
    /// the current center.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative extent, `ShapeMismatch`
    /// if the drawable is not a rectangle, and `NotFound` for an
    /// unknown id.
    pub fn set_rect_size(&mut self, id: DrawableId, size: Size) -> Result<(), CanvasError> {
        ensure_non_negative("width", size.width)?;
        ensure_non_negative("height", size.height)?;
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        match self.drawables[index].shape {
            Shape::Rect { corner_radius, .. } => {
                self.drawables[index].shape = Shape::Rect { size, corner_radius };
                self.reframe(index);
                Ok(())
            }
            Shape::Circle { .. } => Err(CanvasError::ShapeMismatch { id, expected: "rectangle" }),
        }
    }

    /// Set a rectangle's corner radius in model units.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative radius, `ShapeMismatch`
    /// if the drawable is not a rectangle, and `NotFound` for an
    /// unknown id.
    pub fn set_corner_radius(&mut self, id: DrawableId, corner_radius: f64) -> Result<(), CanvasError> {
        ensure_non_negative("corner radius", corner_radius)?;
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        match self.drawables[index].shape {
            Shape::Rect { size, .. } => {
                self.drawables[index].shape = Shape::Rect { size, corner_radius };
                let drawable = &self.drawables[index];
                self.backend.set_corner_radius(drawable.visual, drawable.shape.corner_radius_screen(&self.space));
                Ok(())
            }
            Shape::Circle { .. } => Err(CanvasError::ShapeMismatch { id, expected: "rectangle" }),
        }
    }

    // --- Surface ---

    /// Toggle the background alignment grid.
    pub fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
        self.backend.set_grid_visible(visible);
    }

    /// Set the canvas background color.
    pub fn set_background(&mut self, color: Color) {
        self.background = color.clone();
        self.backend.set_background(color);
    }

    // --- Handler registration ---

    /// Register the pointer-down callback for a drawable, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn on_touch_down(
        &mut self,
        id: DrawableId,
        handler: impl FnMut(Point) + 'static,
    ) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        self.drawables[index].handlers.down = Some(Box::new(handler));
        Ok(())
    }

    /// Register the pointer-up callback for a drawable, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn on_touch_up(
        &mut self,
        id: DrawableId,
        handler: impl FnMut(Point) + 'static,
    ) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        self.drawables[index].handlers.up = Some(Box::new(handler));
        Ok(())
    }

    /// Register the drag callback for a drawable, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn on_touch_drag(
        &mut self,
        id: DrawableId,
        handler: impl FnMut(Point) + 'static,
    ) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        self.drawables[index].handlers.drag = Some(Box::new(handler));
        Ok(())
    }

    /// Register the cancel callback for a drawable, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not on this canvas.
    pub fn on_touch_cancelled(
        &mut self,
        id: DrawableId,
        handler: impl FnMut(Point) + 'static,
    ) -> Result<(), CanvasError> {
        let index = self.index_of(id).ok_or(CanvasError::NotFound(id))?;
        self.drawables[index].handlers.cancelled = Some(Box::new(handler));
        Ok(())
    }

    /// Canvas-level pointer-down callback; fires only when no drawable
    /// claims the touch. Replaces any previous one.
    pub fn on_canvas_touch_down(&mut self, handler: impl FnMut(Point) + 'static) {
        self.handlers.down = Some(Box::new(handler));
    }

    /// Canvas-level pointer-up callback. Replaces any previous one.
    pub fn on_canvas_touch_up(&mut self, handler: impl FnMut(Point) + 'static) {
        self.handlers.up = Some(Box::new(handler));
    }

    /// Canvas-level drag callback. Replaces any previous one.
    pub fn on_canvas_touch_drag(&mut self, handler: impl FnMut(Point) + 'static) {
        self.handlers.drag = Some(Box::new(handler));
    }

    /// Canvas-level cancel callback. Replaces any previous one.
    pub fn on_canvas_touch_cancelled(&mut self, handler: impl FnMut(Point) + 'static) {
        self.handlers.cancelled = Some(Box::new(handler));
    }

    // --- Pointer events ---

    /// Route a batch of pointer-down samples.
    ///
    /// Every sample refreshes the active-touch snapshot; only the first
    /// sample can start a stream, and only while no stream is active.
    /// The stream goes to the topmost drawable that wants the touch and
    /// whose frame contains it, else to the canvas if any canvas-level
    /// handler is registered, else it is dropped.
    pub fn on_pointer_down(&mut self, samples: &[TouchSample]) {
        for sample in samples {
            self.active_touches.insert(sample.id, sample.screen);
        }
        let Some(&first) = samples.first() else { return };
        if self.touch != TouchState::Idle {
            return;
        }
        if let Some(index) = self.route(first.screen) {
            self.begin_drawable_stream(index, first);
        } else if self.handlers.any_registered() {
            self.touch = TouchState::Active { touch: first.id, target: TouchTarget::Surface };
            trace!(touch = first.id, "surface claimed touch");
            let at = self.space.to_model(first.screen);
            self.handlers.fire_down(at);
        } else {
            trace!(touch = first.id, "touch dropped, no interested target");
        }
    }

    /// Route a batch of pointer-move samples, advancing the active drag
    /// if its touch moved.
    pub fn on_pointer_move(&mut self, samples: &[TouchSample]) {
        for sample in samples {
            if let Some(position) = self.active_touches.get_mut(&sample.id) {
                *position = sample.screen;
            }
        }
        let TouchState::Active { touch, target } = self.touch else { return };
        let Some(sample) = samples.iter().find(|s| s.id == touch) else { return };
        let at = self.space.to_model(sample.screen);
        match target {
            TouchTarget::Drawable(id) => {
                let Some(index) = self.index_of(id) else { return };
                let drawable = &mut self.drawables[index];
                if let Some(drag) = drawable.drag {
                    drawable.anchor = self.space.to_screen(at - drag.offset);
                    self.backend.set_frame(drawable.visual, drawable.frame(&self.space));
                }
                drawable.handlers.fire_drag(at);
            }
            TouchTarget::Surface => self.handlers.fire_drag(at),
        }
    }

    /// Route a batch of pointer-up samples, ending the active stream if
    /// its touch lifted.
    pub fn on_pointer_up(&mut self, samples: &[TouchSample]) {
        self.end_stream(samples, StreamEnd::Up);
    }

    /// Route a batch of pointer-cancel samples. Same shutdown as an up,
    /// but the cancel callback fires instead.
    pub fn on_pointer_cancel(&mut self, samples: &[TouchSample]) {
        self.end_stream(samples, StreamEnd::Cancelled);
    }

    // --- Internals ---

    fn index_of(&self, id: DrawableId) -> Option<usize> {
        self.drawables.iter().position(|d| d.id == id)
    }

    /// Topmost drawable whose frame contains `screen` and which wants
    /// the touch. Later entries win: they are painted in front.
    fn route(&self, screen: ScreenPoint) -> Option<usize> {
        self.drawables
            .iter()
            .rposition(|d| d.wants_touch() && d.frame(&self.space).contains(screen))
    }

    fn begin_drawable_stream(&mut self, index: usize, sample: TouchSample) {
        let at = self.space.to_model(sample.screen);
        let id = self.drawables[index].id;
        self.touch = TouchState::Active { touch: sample.id, target: TouchTarget::Drawable(id) };
        trace!(%id, touch = sample.id, "drawable claimed touch");
        let index = if self.drawables[index].draggable {
            // Bring to front before the down callback runs, so the
            // callback observes the final z-order.
            let moved = self.drawables.remove(index);
            self.drawables.push(moved);
            let top = self.drawables.len() - 1;
            let drawable = &mut self.drawables[top];
            self.backend.bring_to_front(drawable.visual);
            drawable.drag = Some(DragState { offset: at - self.space.to_model(drawable.anchor) });
            drawable.press_scale = PRESS_SCALE;
            drawable.press_rotation = PRESS_ROTATION;
            self.backend.set_transform(
                drawable.visual,
                drawable.visual_transform(),
                Some(Transition::default()),
            );
            top
        } else {
            index
        };
        self.drawables[index].handlers.fire_down(at);
    }

    fn end_stream(&mut self, samples: &[TouchSample], end: StreamEnd) {
        for sample in samples {
            self.active_touches.remove(&sample.id);
        }
        let TouchState::Active { touch, target } = self.touch else { return };
        let Some(sample) = samples.iter().find(|s| s.id == touch) else { return };
        let at = self.space.to_model(sample.screen);
        self.touch = TouchState::Idle;
        match target {
            TouchTarget::Drawable(id) => {
                let Some(index) = self.index_of(id) else { return };
                let drawable = &mut self.drawables[index];
                if drawable.drag.take().is_some() {
                    drawable.press_scale = 1.0;
                    drawable.press_rotation = 0.0;
                    self.backend.set_transform(
                        drawable.visual,
                        drawable.visual_transform(),
                        Some(Transition::default()),
                    );
                }
                match end {
                    StreamEnd::Up => self.drawables[index].handlers.fire_up(at),
                    StreamEnd::Cancelled => self.drawables[index].handlers.fire_cancelled(at),
                }
            }
            TouchTarget::Surface => match end {
                StreamEnd::Up => self.handlers.fire_up(at),
                StreamEnd::Cancelled => self.handlers.fire_cancelled(at),
            },
        }
    }

    /// Re-apply frame and silhouette after a shape change. The frame is
    /// recentered on the unchanged anchor, so the screen center (and
    /// the model center with it) is preserved across any resize.
    fn reframe(&mut self, index: usize) {
        let drawable = &self.drawables[index];
        self.backend.set_frame(drawable.visual, drawable.frame(&self.space));
        self.backend.set_corner_radius(drawable.visual, drawable.shape.corner_radius_screen(&self.space));
    }

    /// Convert a model-space shadow to screen units. The Y offset is
    /// negated: a positive model offset points up, a positive screen
    /// offset points down.
    fn shadow_spec(&self, shadow: &Shadow) -> ShadowSpec {
        ShadowSpec {
            offset_x: self.space.magnitude_to_screen(shadow.offset.x),
            offset_y: -self.space.magnitude_to_screen(shadow.offset.y),
            blur_radius: self.space.magnitude_to_screen(shadow.blur_radius),
            opacity: shadow.opacity,
            color: shadow.color.clone(),
        }
    }
}

/// Screen position of the viewport's visual center.
fn viewport_center(viewport: ScreenSize) -> ScreenPoint {
    ScreenPoint::new(viewport.width * 0.5, viewport.height * 0.5)
}

fn ensure_finite(what: &'static str, value: f64) -> Result<(), CanvasError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CanvasError::InvalidArgument { what, value })
    }
}

/// Rejects negative and non-finite values.
fn ensure_non_negative(what: &'static str, value: f64) -> Result<(), CanvasError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidArgument { what, value })
    }
}

fn ensure_unit_interval(what: &'static str, value: f64) -> Result<(), CanvasError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CanvasError::InvalidArgument { what, value })
    }
}
