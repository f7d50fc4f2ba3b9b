use crate::bounding_volume::Aabb;
use crate::math::{Color, Point, Real};
use alloc::vec::Vec;

/// An ordered set of 3D points, optionally with one color per point.
///
/// Colors are only taken into account if there is exactly one color per point (see
/// [`PointCloud::has_colors`]). A color buffer with any other length is ignored rather than
/// rejected.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxgrid3d::shape::PointCloud;
/// use nalgebra::{Point3, Vector3};
///
/// let cloud = PointCloud::with_colors(
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0)],
///     vec![Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)],
/// );
/// assert!(cloud.has_colors());
///
/// let aabb = cloud.aabb();
/// assert_eq!(aabb.mins, Point3::origin());
/// assert_eq!(aabb.maxs, Point3::new(1.0, 2.0, 3.0));
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    /// The point positions.
    pub points: Vec<Point<Real>>,
    /// The point colors, parallel to `points`.
    pub colors: Vec<Color>,
}

impl PointCloud {
    /// Creates a point cloud without colors.
    pub fn new(points: Vec<Point<Real>>) -> Self {
        Self {
            points,
            colors: Vec::new(),
        }
    }

    /// Creates a point cloud with one color per point.
    pub fn with_colors(points: Vec<Point<Real>>, colors: Vec<Color>) -> Self {
        Self { points, colors }
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this point cloud contain no point?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Does this point cloud have exactly one color for each of its points?
    pub fn has_colors(&self) -> bool {
        !self.points.is_empty() && self.colors.len() == self.points.len()
    }

    /// The tight axis-aligned bounding box of the points.
    ///
    /// An empty point cloud has the degenerate bounding box located at the origin.
    pub fn aabb(&self) -> Aabb {
        if self.points.is_empty() {
            Aabb::new(Point::origin(), Point::origin())
        } else {
            Aabb::from_points(self.points.iter().copied())
        }
    }
}
