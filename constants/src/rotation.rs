use std::f64::consts::TAU;

/// Number of equal angular slices in one turn.
pub const TOTAL_SEGMENTS: usize = 10;

/// Radians added per frame while auto-rotating.
pub const ROTATION_SPEED: f64 = 0.003;

/// Angle at which auto-rotation wraps back to zero.
pub const TOTAL_ROTATION: f64 = TAU;

/// Radians per pixel of horizontal pointer travel while dragging.
pub const DRAG_SENSITIVITY: f64 = 0.005;
