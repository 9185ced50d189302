#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;

use crate::geom::{Point, ScreenPoint, ScreenSize, Size};

/// Mapping between model space and screen space.
///
/// `points_per_unit` is the fixed scale factor (screen points per model
/// unit). `center_offset` is the screen position of the model origin,
/// the viewport's visual center, and is refreshed by the canvas before
/// any conversion whenever the viewport changes. The Y axis flips across
/// the mapping: model Y points up, screen Y points down.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateSpace {
    points_per_unit: f64,
    center_offset: ScreenPoint,
}

impl CoordinateSpace {
    #[must_use]
    pub fn new(points_per_unit: f64) -> Self {
        Self { points_per_unit, center_offset: ScreenPoint::default() }
    }

    #[must_use]
    pub fn points_per_unit(&self) -> f64 {
        self.points_per_unit
    }

    #[must_use]
    pub fn center_offset(&self) -> ScreenPoint {
        self.center_offset
    }

    /// Move the model origin to a new screen position.
    ///
    /// The owner must shift any stored screen anchors by the same delta
    /// so their model positions stay put.
    pub fn recenter(&mut self, center_offset: ScreenPoint) {
        self.center_offset = center_offset;
    }

    /// Convert a model-space point to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, model: Point) -> ScreenPoint {
        ScreenPoint {
            x: model.x * self.points_per_unit + self.center_offset.x,
            y: self.center_offset.y - model.y * self.points_per_unit,
        }
    }

    /// Convert a screen-space point to model coordinates. Exact inverse
    /// of [`Self::to_screen`] at any fixed center offset.
    #[must_use]
    pub fn to_model(&self, screen: ScreenPoint) -> Point {
        Point {
            x: (screen.x - self.center_offset.x) / self.points_per_unit,
            y: (self.center_offset.y - screen.y) / self.points_per_unit,
        }
    }

    /// Convert a model-space magnitude to screen points.
    #[must_use]
    pub fn magnitude_to_screen(&self, model: f64) -> f64 {
        model * self.points_per_unit
    }

    /// Convert a screen-space magnitude to model units.
    #[must_use]
    pub fn magnitude_to_model(&self, screen: f64) -> f64 {
        screen / self.points_per_unit
    }

    /// Convert a model-space extent to screen points.
    #[must_use]
    pub fn size_to_screen(&self, model: Size) -> ScreenSize {
        ScreenSize {
            width: self.magnitude_to_screen(model.width),
            height: self.magnitude_to_screen(model.height),
        }
    }

    /// Convert a screen-space extent to model units.
    #[must_use]
    pub fn size_to_model(&self, screen: ScreenSize) -> Size {
        Size {
            width: self.magnitude_to_model(screen.width),
            height: self.magnitude_to_model(screen.height),
        }
    }
}
