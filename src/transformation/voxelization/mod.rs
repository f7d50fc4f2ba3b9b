pub use self::color_accumulator::VoxelColorAccumulator;
pub use self::error::VoxelizationError;
pub use self::voxel_index::{voxel_index, MAX_GRID_INDEX};

mod color_accumulator;
mod dense;
mod error;
mod point_cloud;
mod voxel_index;
