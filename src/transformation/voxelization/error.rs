/// Errors that can occur while building a [`VoxelGrid`](crate::shape::VoxelGrid).
///
/// All of them are caused by the caller's input and are detected before any voxel is
/// computed, so a failed construction never yields a partial grid.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxgrid3d::shape::{PointCloud, VoxelGrid};
/// use voxgrid3d::transformation::VoxelizationError;
/// use nalgebra::Point3;
///
/// let cloud = PointCloud::new(vec![Point3::origin()]);
///
/// match VoxelGrid::from_point_cloud(&cloud, 0.0) {
///     Err(VoxelizationError::InvalidParameter(reason)) => {
///         assert_eq!(reason, "voxel_size <= 0");
///     }
///     Ok(_) => unreachable!(),
/// }
/// # }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoxelizationError {
    /// A construction parameter is out of its valid range.
    ///
    /// The attached message names the offending parameter:
    /// - `"voxel_size <= 0"`: the voxel size is zero, negative, or NaN.
    /// - `"voxel_size is too small"`: the voxel size is so small that the number of voxels
    ///   along the largest axis of the voxelized box would not fit into a grid index.
    /// - `"dense grid dimensions exceed the grid index range"`: a dense grid would have more
    ///   voxels along one axis than a grid index can represent.
    #[error("invalid parameter: {0}.")]
    InvalidParameter(&'static str),
}
