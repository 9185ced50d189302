use crate::drawable::DrawableId;

/// Errors returned by canvas property and lifecycle operations.
///
/// Invalid geometry is rejected at the setter boundary, never clamped.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// A numeric argument was outside its documented range (negative
    /// radius or scale, opacity outside `[0, 1]`, non-finite input).
    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },

    /// The drawable id is not on this canvas.
    #[error("drawable not found: {0}")]
    NotFound(DrawableId),

    /// The operation targets a different shape kind.
    #[error("drawable {id} is not a {expected}")]
    ShapeMismatch { id: DrawableId, expected: &'static str },
}
