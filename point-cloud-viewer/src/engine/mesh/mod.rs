//! Mesh generation for point cloud rendering primitives.

/// Point-list mesh built from the parsed cloud's flat arrays.
pub mod point_cloud_mesh;
