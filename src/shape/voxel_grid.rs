use crate::math::{Color, Point, Real};
use crate::utils::hashmap::HashMap;

/// A single occupied cell of a [`VoxelGrid`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Voxel {
    /// The voxel's integer grid coordinates.
    pub grid_index: Point<i32>,
    /// The voxel's color. Components are not clamped to `[0, 1]`.
    pub color: Color,
}

impl Voxel {
    /// Creates a voxel at the given grid coordinates.
    pub fn new(grid_index: Point<i32>, color: Color) -> Self {
        Self { grid_index, color }
    }
}

/// A sparse set of colored voxels laid out on a regular grid.
///
/// The voxel with grid index `(i, j, k)` covers the cube with minimum corner
/// `origin + (i, j, k) * voxel_size` and edge length `voxel_size`. There is at most one
/// voxel per grid index.
///
/// A voxel grid is typically built with one of:
/// - [`VoxelGrid::from_point_cloud`] or [`VoxelGrid::from_point_cloud_within_bounds`]
///   to voxelize a [`PointCloud`](crate::shape::PointCloud).
/// - [`VoxelGrid::dense`] to fill a box entirely.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxgrid3d::shape::{Voxel, VoxelGrid};
/// use nalgebra::{Point3, Vector3};
///
/// let mut grid = VoxelGrid::new();
/// grid.add_voxel(Voxel::new(Point3::new(0, 1, 2), Vector3::new(1.0, 0.0, 0.0)));
/// // Same index: the previous voxel is replaced.
/// grid.add_voxel(Voxel::new(Point3::new(0, 1, 2), Vector3::new(0.0, 1.0, 0.0)));
///
/// assert_eq!(grid.len(), 1);
/// assert_eq!(grid.voxel(Point3::new(0, 1, 2)).unwrap().color, Vector3::new(0.0, 1.0, 0.0));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    pub(crate) origin: Point<Real>,
    pub(crate) voxel_size: Real,
    pub(crate) voxels: HashMap<Point<i32>, Voxel>,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::with_origin(Point::origin(), 0.0)
    }
}

impl VoxelGrid {
    /// Creates an empty voxel grid with its origin at `(0, 0, 0)` and a voxel size of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty voxel grid with the given origin and voxel size.
    pub fn with_origin(origin: Point<Real>, voxel_size: Real) -> Self {
        Self {
            origin,
            voxel_size,
            voxels: HashMap::default(),
        }
    }

    /// The world-space position of the minimum corner of the voxel with grid index `(0, 0, 0)`.
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The edge length of each voxel.
    pub fn voxel_size(&self) -> Real {
        self.voxel_size
    }

    /// Inserts a voxel, replacing any voxel that had the same grid index.
    pub fn add_voxel(&mut self, voxel: Voxel) {
        let _ = self.voxels.insert(voxel.grid_index, voxel);
    }

    /// The voxel with the given grid index, if there is one.
    pub fn voxel(&self, grid_index: Point<i32>) -> Option<&Voxel> {
        self.voxels.get(&grid_index)
    }

    /// Is there a voxel with the given grid index?
    pub fn contains_voxel(&self, grid_index: Point<i32>) -> bool {
        self.voxels.contains_key(&grid_index)
    }

    /// Iterates through all the voxels of this grid.
    ///
    /// The iteration order is unspecified unless the `enhanced-determinism` feature is
    /// enabled, in which case voxels are yielded in insertion order.
    pub fn voxels(&self) -> impl ExactSizeIterator<Item = &Voxel> + '_ {
        self.voxels.values()
    }

    /// Iterates through the grid indices of all the voxels of this grid.
    pub fn grid_indices(&self) -> impl ExactSizeIterator<Item = Point<i32>> + '_ {
        self.voxels.keys().copied()
    }

    /// The number of voxels in this grid.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Does this grid contain no voxel?
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}
