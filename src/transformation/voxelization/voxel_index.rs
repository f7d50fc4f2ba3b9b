use super::VoxelizationError;
use crate::math::{Point, Real};
#[cfg(not(feature = "std"))]
use na::ComplexField;

/// The largest grid index a voxel can have along any axis.
///
/// Every voxel grid construction checks its parameters against this bound so that the
/// computed grid indices never overflow.
pub const MAX_GRID_INDEX: i32 = i32::MAX;

/// The grid index of the voxel containing `point`, for a grid with the given `origin`
/// and `voxel_size`.
///
/// This is `floor((point - origin) / voxel_size)` componentwise. Points below the origin
/// get negative indices.
///
/// No check is performed here: `voxel_size` must be positive and small enough for the
/// result to fit into an `i32` (see [`MAX_GRID_INDEX`]). Out-of-range components saturate.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxgrid3d::transformation::voxelization::voxel_index;
/// use nalgebra::Point3;
///
/// let origin = Point3::new(1.0, 1.0, 1.0);
/// assert_eq!(voxel_index(&Point3::new(1.3, 2.7, 1.0), &origin, 0.5), Point3::new(0, 3, 0));
/// assert_eq!(voxel_index(&Point3::new(0.9, 1.0, 1.0), &origin, 0.5), Point3::new(-1, 0, 0));
/// # }
/// ```
#[inline]
pub fn voxel_index(point: &Point<Real>, origin: &Point<Real>, voxel_size: Real) -> Point<i32> {
    ((point - origin) / voxel_size)
        .map(|x| x.floor() as i32)
        .into()
}

/// Checks that `voxel_size` is strictly positive, and that a box with the given largest
/// `extent` spans at most [`MAX_GRID_INDEX`] voxels.
pub(super) fn check_voxel_size(voxel_size: Real, extent: Real) -> Result<(), VoxelizationError> {
    // Written so that NaN is rejected too.
    if !(voxel_size > 0.0) {
        return Err(VoxelizationError::InvalidParameter("voxel_size <= 0"));
    }

    if voxel_size * (MAX_GRID_INDEX as Real) < extent {
        return Err(VoxelizationError::InvalidParameter("voxel_size is too small"));
    }

    Ok(())
}
