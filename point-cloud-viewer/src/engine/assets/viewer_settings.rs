use bevy::prelude::*;
use constants::point_cloud::{POINT_CLOUD_PATH, POINT_SCALE, POSITION_OFFSET};
use constants::render_settings::POINT_SIZE;
use constants::rotation::{DRAG_SENSITIVITY, ROTATION_SPEED, TOTAL_ROTATION, TOTAL_SEGMENTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables of the rotation state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationSettings {
    pub total_segments: usize,
    /// Radians per frame while auto-rotating.
    pub rotation_speed: f64,
    /// Auto-rotation wraps to zero once the angle reaches this.
    pub total_rotation: f64,
    /// Radians per pixel of horizontal drag.
    pub drag_sensitivity: f64,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            total_segments: TOTAL_SEGMENTS,
            rotation_speed: ROTATION_SPEED,
            total_rotation: TOTAL_ROTATION,
            drag_sensitivity: DRAG_SENSITIVITY,
        }
    }
}

/// Source file and placement of the rendered cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCloudSettings {
    /// Asset path of the `.ply` file.
    pub source_path: String,
    pub scale: f32,
    pub offset: [f32; 3],
    pub point_size: f32,
}

impl Default for PointCloudSettings {
    fn default() -> Self {
        Self {
            source_path: POINT_CLOUD_PATH.to_string(),
            scale: POINT_SCALE,
            offset: POSITION_OFFSET,
            point_size: POINT_SIZE,
        }
    }
}

impl PointCloudSettings {
    pub fn offset(&self) -> Vec3 {
        Vec3::from_array(self.offset)
    }
}

/// Runtime configuration read from `viewer_settings.json`.
/// Missing fields fall back to the compile-time defaults.
#[derive(
    Resource, Asset, TypePath, Debug, Clone, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct ViewerSettings {
    pub rotation: RotationSettings,
    pub point_cloud: PointCloudSettings,
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("rotation.total_segments must be at least 1")]
    NoSegments,
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("point_cloud.source_path is empty")]
    EmptySourcePath,
}

impl ViewerSettings {
    /// Check every tunable the viewer divides by or accumulates.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let rotation = &self.rotation;
        let point_cloud = &self.point_cloud;

        if rotation.total_segments == 0 {
            return Err(SettingsError::NoSegments);
        }
        positive("rotation.rotation_speed", rotation.rotation_speed)?;
        positive("rotation.total_rotation", rotation.total_rotation)?;
        finite("rotation.drag_sensitivity", rotation.drag_sensitivity)?;

        if point_cloud.source_path.trim().is_empty() {
            return Err(SettingsError::EmptySourcePath);
        }
        finite("point_cloud.scale", point_cloud.scale as f64)?;
        for value in point_cloud.offset {
            finite("point_cloud.offset", value as f64)?;
        }
        positive("point_cloud.point_size", point_cloud.point_size as f64)?;

        Ok(())
    }

    /// Return these settings if valid, otherwise log why and use defaults.
    pub fn validated(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(error) => {
                warn!("Rejected viewer settings ({error}), using defaults");
                Self::default()
            }
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { field, value })
    }
}
