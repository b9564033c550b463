use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::loading::ply_parser::PointCloud;

/// Marks the rotating point cloud entity.
#[derive(Component, Debug)]
pub struct PointCloudMesh;

/// Corners of one point's splat: a quad in the XY plane and one in the ZY
/// plane, so the point stays visible at every rotation about Y.
const SPLAT_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, 0.0],
    [1.0, -1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [0.0, -1.0, -1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, -1.0],
];

const SPLAT_INDICES: [u32; 12] = [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7];

/// Build the render mesh for the cloud, `None` for an empty cloud.
///
/// Points are expanded into crossed quads of edge `point_world_size`. A size of
/// zero or less falls back to a point list, which rasterises at 1px.
pub fn create_point_cloud_mesh(cloud: &PointCloud, point_world_size: f32) -> Option<Mesh> {
    if cloud.is_empty() {
        return None;
    }

    let positions: Vec<[f32; 3]> = cloud
        .positions()
        .chunks_exact(3)
        .map(|xyz| [xyz[0], xyz[1], xyz[2]])
        .collect();
    let colours: Vec<[f32; 4]> = cloud
        .colours()
        .chunks_exact(3)
        .map(|rgb| [rgb[0], rgb[1], rgb[2], 1.0])
        .collect();

    if point_world_size > 0.0 {
        Some(create_splat_mesh(&positions, &colours, point_world_size / 2.0))
    } else {
        let mut mesh = Mesh::new(
            PrimitiveTopology::PointList,
            RenderAssetUsages::RENDER_WORLD,
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
        Some(mesh)
    }
}

fn create_splat_mesh(positions: &[[f32; 3]], colours: &[[f32; 4]], half_size: f32) -> Mesh {
    let vertex_count = positions.len() * SPLAT_CORNERS.len();
    let mut splat_positions = Vec::with_capacity(vertex_count);
    let mut splat_colours = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(positions.len() * SPLAT_INDICES.len());

    for (point, (centre, colour)) in positions.iter().zip(colours).enumerate() {
        let base = (point * SPLAT_CORNERS.len()) as u32;
        let centre = Vec3::from_array(*centre);
        for corner in SPLAT_CORNERS {
            splat_positions.push((centre + Vec3::from_array(corner) * half_size).to_array());
            splat_colours.push(*colour);
        }
        indices.extend(SPLAT_INDICES.iter().map(|index| base + index));
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, splat_positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, splat_colours);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
