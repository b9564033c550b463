//! Asset types for the point cloud source and viewer configuration.
//!
//! Both are loaded through the asset server so native and WASM builds share
//! one loading path.

/// Point cloud source handle and load flags.
pub mod point_cloud_assets;

/// Runtime tunables deserialised from `viewer_settings.json`.
pub mod viewer_settings;
