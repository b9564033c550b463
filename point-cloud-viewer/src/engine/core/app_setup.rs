use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::point_cloud_assets::create_point_cloud_assets;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::pointer::{PointerTracker, mouse_pointer_input, touch_pointer_input};
use crate::engine::loading::ply_loader::{PlyTextLoader, PointCloudSource};
use crate::engine::loading::point_cloud_creator::create_point_cloud_when_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{
    SettingsLoader, load_settings_system, request_point_cloud_source, start_loading,
};
use crate::engine::rotation::controller::RotationSegmentController;
use crate::engine::rotation::systems::{apply_rotation_to_point_cloud, tick_rotation};
use crate::engine::scene::camera::{clear_colour, setup_scene};
use crate::engine::visibility::SegmentChanged;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::visibility::indicators::{apply_segment_indicators, spawn_segment_indicators};

#[cfg(target_arch = "wasm32")]
use crate::engine::visibility::dom::{apply_dom_segment_containers, hide_intro_text};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ViewerSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerSettings>::new(&["json"]))
        .init_asset::<PointCloudSource>()
        .init_asset_loader::<PlyTextLoader>()
        .insert_resource(clear_colour());

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<PointerTracker>()
        .add_event::<SegmentChanged>()
        .insert_resource(create_point_cloud_assets(None));

    app.add_systems(Startup, (setup_scene, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_settings_system,
                request_point_cloud_source,
                create_point_cloud_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    #[cfg(target_arch = "wasm32")]
    {
        app.add_systems(Startup, hide_intro_text);
    }

    // Pointer handling, tick, then the render and indicator consumers. The
    // controller only exists once settings are settled, so rotation starts
    // while the cloud is still loading.
    let rotation_systems = (
        mouse_pointer_input,
        touch_pointer_input,
        tick_rotation,
        apply_rotation_to_point_cloud,
    )
        .chain();

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            spawn_segment_indicators.run_if(resource_added::<ViewerSettings>),
        )
        .add_systems(
            Update,
            (rotation_systems, apply_segment_indicators)
                .chain()
                .after(load_settings_system)
                .run_if(resource_exists::<RotationSegmentController>),
        );
    }

    #[cfg(target_arch = "wasm32")]
    {
        app.add_systems(
            Update,
            (rotation_systems, apply_dom_segment_containers)
                .chain()
                .after(load_settings_system)
                .run_if(resource_exists::<RotationSegmentController>),
        );
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
