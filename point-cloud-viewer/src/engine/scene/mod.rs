//! Static scene furniture: the viewing camera and clear colour.

/// Fixed camera framing the rotating point cloud.
pub mod camera;
