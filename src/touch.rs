//! Pointer input model: samples from the host event source, single-slot
//! user callbacks, and the touch stream state tracked by the canvas.
//!
//! The host gesture layer delivers batched pointer samples with screen
//! locations. The canvas routes the first sample of a down batch to the
//! topmost interested drawable (or to itself when none claims it) and
//! tracks that one stream until its up/cancel. Remaining samples only
//! feed the active-touch snapshot; multi-stream fan-out is not modeled.

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

use std::fmt;

use crate::drawable::DrawableId;
use crate::geom::{Point, ScreenPoint};

/// Host-assigned identifier for one pointer/finger within a gesture.
pub type TouchId = u64;

/// One pointer sample delivered by the host event source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    pub id: TouchId,
    pub screen: ScreenPoint,
}

impl TouchSample {
    #[must_use]
    pub fn new(id: TouchId, screen: ScreenPoint) -> Self {
        Self { id, screen }
    }
}

/// User callback invoked with the touch location in model space.
pub type TouchHandler = Box<dyn FnMut(Point)>;

/// The four touch callback slots of a drawable or of the canvas.
///
/// At most one handler per event kind; registering again replaces the
/// previous handler. There is no multi-subscriber fan-out.
#[derive(Default)]
pub struct TouchHandlers {
    pub(crate) down: Option<TouchHandler>,
    pub(crate) up: Option<TouchHandler>,
    pub(crate) drag: Option<TouchHandler>,
    pub(crate) cancelled: Option<TouchHandler>,
}

impl TouchHandlers {
    /// Whether any slot is occupied.
    #[must_use]
    pub fn any_registered(&self) -> bool {
        self.down.is_some() || self.up.is_some() || self.drag.is_some() || self.cancelled.is_some()
    }

    pub(crate) fn fire_down(&mut self, at: Point) {
        if let Some(handler) = self.down.as_mut() {
            handler(at);
        }
    }

    pub(crate) fn fire_up(&mut self, at: Point) {
        if let Some(handler) = self.up.as_mut() {
            handler(at);
        }
    }

    pub(crate) fn fire_drag(&mut self, at: Point) {
        if let Some(handler) = self.drag.as_mut() {
            handler(at);
        }
    }

    pub(crate) fn fire_cancelled(&mut self, at: Point) {
        if let Some(handler) = self.cancelled.as_mut() {
            handler(at);
        }
    }
}

impl fmt::Debug for TouchHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchHandlers")
            .field("down", &self.down.is_some())
            .field("up", &self.up.is_some())
            .field("drag", &self.drag.is_some())
            .field("cancelled", &self.cancelled.is_some())
            .finish()
    }
}

/// Who claimed the active touch stream at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    /// The topmost interested drawable under the touch.
    Drawable(DrawableId),
    /// No drawable claimed it; canvas-level handlers receive the stream.
    Surface,
}

/// Touch stream state. At most one stream is tracked at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchState {
    /// Waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stream claimed at pointer-down, tracked until its up/cancel.
    Active { touch: TouchId, target: TouchTarget },
}
