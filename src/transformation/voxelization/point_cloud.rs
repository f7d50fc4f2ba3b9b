use super::voxel_index::check_voxel_size;
use super::{voxel_index, VoxelColorAccumulator, VoxelizationError};
use crate::math::{Color, Point, Real};
use crate::shape::{PointCloud, Voxel, VoxelGrid};
use crate::utils::hashmap::HashMap;

impl VoxelGrid {
    /// Voxelizes a point cloud into a grid enclosing all its points.
    ///
    /// The grid bounds are the bounding box of the point cloud enlarged by half a voxel on
    /// each side, so that the extreme points fall in the middle of the first and last voxel
    /// layers instead of on their boundary. Everything else behaves as
    /// [`VoxelGrid::from_point_cloud_within_bounds`].
    ///
    /// With `f32` scalars, coordinates of magnitude `2^23` or more no longer have room for
    /// the half-voxel offset: the padded bounds get rounded and extreme points may land one
    /// voxel off. Use the `voxgrid3d-f64` crate for point clouds with such coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use voxgrid3d::shape::{PointCloud, VoxelGrid};
    /// use nalgebra::Point3;
    ///
    /// let cloud = PointCloud::new(vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(0.2, 0.3, 0.1),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// ]);
    /// let grid = VoxelGrid::from_point_cloud(&cloud, 1.0).unwrap();
    ///
    /// assert_eq!(grid.origin(), Point3::new(-0.5, -0.5, -0.5));
    /// assert_eq!(grid.len(), 2);
    /// assert!(grid.contains_voxel(Point3::new(0, 0, 0)));
    /// assert!(grid.contains_voxel(Point3::new(2, 0, 0)));
    /// # }
    /// ```
    pub fn from_point_cloud(
        point_cloud: &PointCloud,
        voxel_size: Real,
    ) -> Result<Self, VoxelizationError> {
        let bounds = point_cloud.aabb().padded(voxel_size / 2.0);
        Self::from_point_cloud_within_bounds(point_cloud, voxel_size, bounds.mins, bounds.maxs)
    }

    /// Voxelizes a point cloud into a grid with its origin at `min_bound`.
    ///
    /// Each point is assigned to the voxel with grid index
    /// `floor((point - min_bound) / voxel_size)`. Every voxel containing at least one point
    /// is emitted once. If the point cloud has colors, the voxel color is the average color
    /// of its points, otherwise it is black.
    ///
    /// Points are not required to lie inside of `[min_bound, max_bound]`: the bounds are only
    /// used to set the grid origin and to check that `voxel_size` is not too small for their
    /// extent.
    ///
    /// # Errors
    ///
    /// Fails with [`VoxelizationError::InvalidParameter`] if `voxel_size` is not strictly
    /// positive, or if `voxel_size * MAX_GRID_INDEX` is smaller than the largest extent of the
    /// bounds.
    pub fn from_point_cloud_within_bounds(
        point_cloud: &PointCloud,
        voxel_size: Real,
        min_bound: Point<Real>,
        max_bound: Point<Real>,
    ) -> Result<Self, VoxelizationError> {
        if let Err(err) = check_voxel_size(voxel_size, (max_bound - min_bound).max()) {
            log::error!("Cannot voxelize point cloud with voxel_size {voxel_size}: {err}");
            return Err(err);
        }

        let mut result = Self::with_origin(min_bound, voxel_size);
        let has_colors = point_cloud.has_colors();
        let mut accumulators: HashMap<Point<i32>, VoxelColorAccumulator> = HashMap::default();

        for (i, point) in point_cloud.points.iter().enumerate() {
            let index = voxel_index(point, &min_bound, voxel_size);
            let acc = accumulators
                .entry(index)
                .or_insert_with(|| VoxelColorAccumulator::new(index));

            if has_colors {
                acc.add_color(point_cloud.colors[i]);
            } else {
                acc.add();
            }
        }

        result.voxels.reserve(accumulators.len());

        for acc in accumulators.values() {
            let color = if has_colors {
                acc.average_color().unwrap_or_else(Color::zeros)
            } else {
                Color::zeros()
            };
            result.add_voxel(Voxel::new(acc.voxel_index(), color));
        }

        log::debug!(
            "Point cloud voxelized from {} points to {} voxels.",
            point_cloud.len(),
            result.len()
        );

        Ok(result)
    }
}
