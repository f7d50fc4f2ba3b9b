use super::{VoxelizationError, MAX_GRID_INDEX};
use crate::math::{Color, Point, Real};
use crate::shape::{Voxel, VoxelGrid};
#[cfg(not(feature = "std"))]
use na::ComplexField;

impl VoxelGrid {
    /// Creates a grid where every voxel of the box `[0, width] × [0, height] × [0, depth]`
    /// (relative to `origin`) is filled with the same `color`.
    ///
    /// The number of voxels along each axis is the corresponding dimension divided by
    /// `voxel_size`, rounded to the nearest integer. A dimension rounding to zero or to a
    /// negative number of voxels yields an empty grid.
    ///
    /// # Errors
    ///
    /// Fails with [`VoxelizationError::InvalidParameter`] if `voxel_size` is not strictly
    /// positive, or if the number of voxels along an axis is not finite or exceeds
    /// [`MAX_GRID_INDEX`].
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use voxgrid3d::shape::VoxelGrid;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let red = Vector3::new(1.0, 0.0, 0.0);
    /// let grid = VoxelGrid::dense(Point3::origin(), red, 1.0, 2.0, 2.0, 1.0).unwrap();
    ///
    /// assert_eq!(grid.len(), 4);
    /// assert!(grid.contains_voxel(Point3::new(1, 1, 0)));
    /// assert!(grid.voxels().all(|v| v.color == red));
    /// # }
    /// ```
    pub fn dense(
        origin: Point<Real>,
        color: Color,
        voxel_size: Real,
        width: Real,
        height: Real,
        depth: Real,
    ) -> Result<Self, VoxelizationError> {
        // Written so that NaN is rejected too.
        if !(voxel_size > 0.0) {
            log::error!("Cannot create a dense voxel grid with voxel_size {voxel_size}.");
            return Err(VoxelizationError::InvalidParameter("voxel_size <= 0"));
        }

        let num_w = num_voxels_along_axis(width, voxel_size)?;
        let num_h = num_voxels_along_axis(height, voxel_size)?;
        let num_d = num_voxels_along_axis(depth, voxel_size)?;
        let mut result = Self::with_origin(origin, voxel_size);

        for widx in 0..num_w {
            for hidx in 0..num_h {
                for didx in 0..num_d {
                    result.add_voxel(Voxel::new(Point::new(widx, hidx, didx), color));
                }
            }
        }

        log::debug!(
            "Dense voxel grid created with {}x{}x{} voxels.",
            num_w.max(0),
            num_h.max(0),
            num_d.max(0)
        );

        Ok(result)
    }
}

fn num_voxels_along_axis(dimension: Real, voxel_size: Real) -> Result<i32, VoxelizationError> {
    let num = (dimension / voxel_size).round();

    if !num.is_finite() || num > MAX_GRID_INDEX as Real {
        log::error!(
            "Cannot create a dense voxel grid of dimension {dimension} with voxel_size {voxel_size}."
        );
        return Err(VoxelizationError::InvalidParameter(
            "dense grid dimensions exceed the grid index range",
        ));
    }

    Ok(num as i32)
}
