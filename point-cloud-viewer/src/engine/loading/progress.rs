use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub settings_loaded: bool,
    pub source_requested: bool,
    pub point_cloud_created: bool,
}
