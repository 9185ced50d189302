//! Retained-mode 2D drawing surface for an educational programming
//! environment.
//!
//! Shapes live in a resolution-independent model space (origin at the
//! canvas visual center, Y-up) and are owned by a [`canvas::Canvas`]
//! that maps them onto the host's screen coordinates, routes raw
//! pointer events into drags, z-order changes, and user callbacks, and
//! keeps model positions stable while the viewport resizes. Painting
//! and animation easing belong to the host: the canvas drives them
//! through [`backend::RenderBackend`] and never draws a pixel itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`canvas`] | Root container: ordering, touch routing, viewport resizes |
//! | [`drawable`] | Shapes and per-drawable properties |
//! | [`space`] | Model ↔ screen coordinate conversions |
//! | [`geom`] | Geometry value types and the affine transform |
//! | [`touch`] | Pointer samples, callbacks, and stream state |
//! | [`backend`] | Rendering/animation boundary consumed by the canvas |
//! | [`error`] | Error type for property and lifecycle operations |
//! | [`consts`] | Shared numeric defaults (scale, press feedback, timing) |

pub mod backend;
pub mod canvas;
pub mod consts;
pub mod drawable;
pub mod error;
pub mod geom;
pub mod space;
pub mod touch;
