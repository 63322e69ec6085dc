//! Decorative particle-field background.
//!
//! Renders an animated field of drifting points on a fullscreen canvas:
//! - Seeds a particle set sized to the viewport (capped per device tier)
//! - Advances positions each animation frame with wrap-around bounds
//! - Joins nearby pairs with distance-faded connection lines
//! - Nudges particles away from the pointer as it moves
//!
//! The field reseeds on resize settle and on color-mode changes, and the
//! frame loop holds a single-pending-frame invariant: at most one scheduled
//! callback exists at any time, across reseed storms and teardown.

mod component;
mod field;
mod particle;
mod render;
mod schedule;
pub mod theme;
pub mod tier;

pub use component::ParticleFieldCanvas;
pub use theme::ColorMode;
