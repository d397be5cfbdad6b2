//! Click-wheel input: pointer geometry, rotation steps and tap zones.

pub mod geometry;
pub mod gesture;
pub mod scroll;

pub use geometry::{Point, WheelGeometry};
pub use gesture::{GestureState, TapZone};
pub use scroll::ScrollAccumulator;
