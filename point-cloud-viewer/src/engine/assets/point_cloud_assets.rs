use bevy::prelude::*;

use crate::engine::loading::ply_loader::PointCloudSource;

/// Handle to the raw point cloud text, set once settings are known.
#[derive(Resource, Default)]
pub struct PointCloudAssets {
    pub source: Option<Handle<PointCloudSource>>,
}

pub fn create_point_cloud_assets(source: Option<Handle<PointCloudSource>>) -> PointCloudAssets {
    PointCloudAssets { source }
}
