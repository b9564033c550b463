use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::REFERENCE_VIEWPORT_HEIGHT;

use crate::engine::assets::point_cloud_assets::PointCloudAssets;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::loading::ply_loader::PointCloudSource;
use crate::engine::loading::ply_parser::parse_point_cloud;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::point_cloud_mesh::{PointCloudMesh, create_point_cloud_mesh};
use crate::engine::scene::camera::point_world_size;

pub fn create_point_cloud_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    assets: Res<PointCloudAssets>,
    sources: Res<Assets<PointCloudSource>>,
    settings: Option<Res<ViewerSettings>>,
    asset_server: Res<AssetServer>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if loading_progress.point_cloud_created {
        return;
    }
    let (Some(handle), Some(settings)) = (assets.source.as_ref(), settings) else {
        return;
    };

    let Some(source) = sources.get(handle) else {
        if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle) {
            warn!("Point cloud source failed to load ({error}); nothing will be drawn");
            loading_progress.point_cloud_created = true;
        }
        return;
    };

    let point_settings = &settings.point_cloud;
    let cloud = parse_point_cloud(&source.text, point_settings.scale, point_settings.offset());
    let summary = cloud.summary();
    info!(
        "Parsed {} of {} data lines ({} header lines, {} malformed lines skipped)",
        summary.accepted(),
        summary.data_lines,
        summary.header_lines,
        summary.malformed_lines
    );
    if summary.unterminated_tail {
        debug!("Final line has no trailing newline and was not parsed");
    }

    loading_progress.point_cloud_created = true;

    let viewport_height = windows
        .single()
        .map(Window::height)
        .unwrap_or(REFERENCE_VIEWPORT_HEIGHT);
    let splat_size = point_world_size(point_settings.point_size, viewport_height);

    // Empty clouds skip the entity entirely so no draw call is issued.
    let Some(mesh) = create_point_cloud_mesh(&cloud, splat_size) else {
        warn!("Point cloud is empty; skipping draw");
        return;
    };

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        Transform::from_translation(Vec3::ZERO),
        Visibility::Visible,
        PointCloudMesh,
        // Disable frustum culling; the cloud rotates around the camera's focus.
        bevy::render::view::NoFrustumCulling,
    ));

    info!(
        "Point cloud entity spawned with {} points ({} px, {:.3} units per splat)",
        cloud.len(),
        point_settings.point_size,
        splat_size
    );
}
