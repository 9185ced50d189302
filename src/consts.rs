//! Shared numeric constants for the easel crate.

// ── Coordinate space ────────────────────────────────────────────

/// Screen points per model unit for a default canvas.
pub const POINTS_PER_UNIT: f64 = 10.0;

// ── Shapes ──────────────────────────────────────────────────────

/// Default circle radius in model units.
pub const DEFAULT_RADIUS: f64 = 5.0;

// ── Press feedback ──────────────────────────────────────────────

/// Transient scale applied to a draggable drawable while pressed.
pub const PRESS_SCALE: f64 = 1.15;

/// Transient rotation in radians applied while pressed (π/16).
pub const PRESS_ROTATION: f64 = std::f64::consts::PI / 16.0;

// ── Animation ───────────────────────────────────────────────────

/// Default visual transition duration in seconds.
pub const TRANSITION_SECS: f64 = 0.35;
