//! Geometric containers consumed and produced by the voxelization.

pub use self::point_cloud::PointCloud;
pub use self::voxel_grid::{Voxel, VoxelGrid};

mod point_cloud;
mod voxel_grid;
