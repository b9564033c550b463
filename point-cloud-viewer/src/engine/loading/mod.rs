//! Asset loading and initialisation systems for the point cloud viewer.
//!
//! Runs settings → source text → parsed mesh, tracked by [`progress::LoadingProgress`].

/// Pure PLY-style text parser producing render-space points.
pub mod ply_parser;

/// Asset loader reading `.ply` files as raw text.
pub mod ply_loader;

/// Point cloud entity creation once the source text is available.
///
/// Parses with the configured scale and offset and spawns the point-list mesh.
pub mod point_cloud_creator;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Settings file loading with fallback to compile-time defaults.
///
/// Inserts the rotation controller and requests the point cloud source.
pub mod settings_loader;
