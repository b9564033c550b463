use bevy::prelude::*;

use crate::engine::mesh::point_cloud_mesh::PointCloudMesh;
use crate::engine::rotation::controller::RotationSegmentController;
use crate::engine::visibility::SegmentChanged;

/// Advance the controller one frame, emitting [`SegmentChanged`] on change.
pub fn tick_rotation(
    mut controller: ResMut<RotationSegmentController>,
    mut segment_events: EventWriter<SegmentChanged>,
) {
    controller.tick(&mut segment_events);
}

/// Apply the controller's angle as a Y rotation of the point cloud.
pub fn apply_rotation_to_point_cloud(
    controller: Res<RotationSegmentController>,
    mut point_clouds: Query<&mut Transform, With<PointCloudMesh>>,
) {
    let rotation = Quat::from_rotation_y(controller.angle() as f32);
    for mut transform in &mut point_clouds {
        transform.rotation = rotation;
    }
}
