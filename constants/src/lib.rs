//! Compile-time defaults shared by the viewer.
//!
//! Runtime overrides are read from `viewer_settings.json`; every value here is
//! the fallback when a field is missing or rejected.

/// Source-to-render axis conventions applied by the point cloud parser.
pub mod coordinate_system;

/// Element ids and class names of the host page's segment containers.
pub mod dom;

/// Point cloud source path, scale and offset.
pub mod point_cloud;

/// Clear colour, camera placement and point appearance.
pub mod render_settings;

/// Auto-rotation, drag and segment tunables.
pub mod rotation;
