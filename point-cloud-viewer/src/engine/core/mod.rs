//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and the loading
//! transition for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers the asset loaders, loading chain and per-frame rotation systems.
pub mod app_setup;

/// Application state machine and the loading to running transition.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
