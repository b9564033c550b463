use bevy::prelude::*;
use constants::render_settings::{CAMERA_FOV_Y, CAMERA_POSITION, CLEAR_COLOUR_RGB};

/// Background colour behind the cloud.
pub fn clear_colour() -> ClearColor {
    let [r, g, b] = CLEAR_COLOUR_RGB;
    ClearColor(Color::srgb_u8(r, g, b))
}

/// Camera transform looking at the origin.
///
/// Up is `-Y` because the cloud is stored with its Y axis inverted; this keeps
/// it upright on screen without touching the parsed positions.
pub fn camera_transform() -> Transform {
    Transform::from_translation(Vec3::from_array(CAMERA_POSITION))
        .looking_at(Vec3::ZERO, Vec3::NEG_Y)
}

/// World-space edge length covering `point_size_px` pixels at the camera's
/// focus distance for a viewport `viewport_height_px` tall.
pub fn point_world_size(point_size_px: f32, viewport_height_px: f32) -> f32 {
    let distance = Vec3::from_array(CAMERA_POSITION).length();
    let visible_height = 2.0 * distance * (CAMERA_FOV_Y / 2.0).tan();
    point_size_px * visible_height / viewport_height_px
}

pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_Y,
            ..default()
        }),
        camera_transform(),
    ));
}
