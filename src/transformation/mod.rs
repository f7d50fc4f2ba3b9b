//! Transformation of point clouds and volumes into voxel grids.

pub use self::voxelization::{VoxelColorAccumulator, VoxelizationError, MAX_GRID_INDEX};

/// Voxelization of 3D point clouds and dense volumes.
pub mod voxelization;
