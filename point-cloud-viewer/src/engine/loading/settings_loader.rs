use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::point_cloud::VIEWER_SETTINGS_PATH;

use crate::engine::assets::point_cloud_assets::PointCloudAssets;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::rotation::controller::RotationSegmentController;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<ViewerSettings>>,
}

// Start the loading process
pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    info!("Loading viewer settings from: {}", VIEWER_SETTINGS_PATH);
    settings_loader.handle = Some(asset_server.load(VIEWER_SETTINGS_PATH));
}

/// Settle the settings once the file loads or fails, then start the controller.
pub fn load_settings_system(
    mut loading_progress: ResMut<LoadingProgress>,
    settings_loader: Res<SettingsLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<ViewerSettings>>,
) {
    if loading_progress.settings_loaded {
        return;
    }

    let Some(handle) = &settings_loader.handle else {
        return;
    };

    let settings = if let Some(settings) = settings_assets.get(handle) {
        info!("✓ Viewer settings loaded");
        settings.clone().validated()
    } else if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle) {
        warn!("Viewer settings unavailable ({error}), using defaults");
        ViewerSettings::default()
    } else {
        return;
    };

    commands.insert_resource(RotationSegmentController::new(settings.rotation.clone()));
    commands.insert_resource(settings);
    loading_progress.settings_loaded = true;
}

/// Request the point cloud file named by the settings.
pub fn request_point_cloud_source(
    mut loading_progress: ResMut<LoadingProgress>,
    mut assets: ResMut<PointCloudAssets>,
    settings: Option<Res<ViewerSettings>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.source_requested {
        return;
    }
    let Some(settings) = settings else {
        return;
    };

    let path = &settings.point_cloud.source_path;
    info!("Loading point cloud from: {}", path);
    assets.source = Some(asset_server.load(path.clone()));
    loading_progress.source_requested = true;
}
