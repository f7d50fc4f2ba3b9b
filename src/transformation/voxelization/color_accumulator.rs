use crate::math::{Color, Point, Real};

/// Running sum of the colors of the points falling into a single voxel.
///
/// An accumulator is created for each distinct grid index reached during a point cloud
/// voxelization, and discarded once the final voxels are emitted.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxgrid3d::transformation::VoxelColorAccumulator;
/// use nalgebra::{Point3, Vector3};
///
/// let mut acc = VoxelColorAccumulator::new(Point3::new(1, 2, 3));
/// assert_eq!(acc.average_color(), None);
///
/// acc.add_color(Vector3::new(1.0, 0.0, 0.0));
/// acc.add_color(Vector3::new(0.0, 0.0, 1.0));
/// assert_eq!(acc.num_points(), 2);
/// assert_eq!(acc.average_color(), Some(Vector3::new(0.5, 0.0, 0.5)));
/// assert_eq!(acc.voxel_index(), Point3::new(1, 2, 3));
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelColorAccumulator {
    voxel_index: Point<i32>,
    color_sum: Color,
    num_points: usize,
}

impl VoxelColorAccumulator {
    /// Creates an accumulator for the voxel with the given grid index, without any point.
    pub fn new(voxel_index: Point<i32>) -> Self {
        Self {
            voxel_index,
            color_sum: Color::zeros(),
            num_points: 0,
        }
    }

    /// Accounts for one more point without color.
    ///
    /// The point contributes black to the average color.
    pub fn add(&mut self) {
        self.num_points += 1;
    }

    /// Accounts for one more point with the given color.
    pub fn add_color(&mut self, color: Color) {
        self.color_sum += color;
        self.num_points += 1;
    }

    /// The grid index of the voxel this accumulator is attached to.
    pub fn voxel_index(&self) -> Point<i32> {
        self.voxel_index
    }

    /// The number of points accumulated so far.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// The average color of the accumulated points.
    ///
    /// Returns `None` if no point was accumulated.
    pub fn average_color(&self) -> Option<Color> {
        if self.num_points == 0 {
            None
        } else {
            Some(self.color_sum / (self.num_points as Real))
        }
    }
}
