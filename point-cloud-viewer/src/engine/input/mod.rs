//! Mouse and touch input mapped onto press, drag and release.

/// Pointer event mapping for the rotation controller.
pub mod pointer;
