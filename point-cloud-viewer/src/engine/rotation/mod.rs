//! Angle-to-segment state machine and the systems driving it each frame.
//!
//! ## Modes
//!
//! ```text
//! AutoRotate ──press──> Dragging ──release──> Idle
//!     │ tick: angle += speed          ^            │
//!     │ wraps to 0 at a full turn     └──press─────┘
//! ```
//!
//! While auto-rotating every segment notification hides all indicators.
//! Once the user presses, the facing segment's indicator pair is shown.

/// Rotation state and pointer transitions.
pub mod controller;

/// Angle normalisation and segment indexing.
pub mod segment;

/// Per-frame tick and transform systems.
pub mod systems;
