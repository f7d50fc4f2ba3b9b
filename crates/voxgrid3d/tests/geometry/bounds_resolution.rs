use approx::assert_relative_eq;
use na::{Point3, Vector3};
use voxgrid3d::shape::{PointCloud, VoxelGrid};
use voxgrid3d::transformation::VoxelizationError;

#[test]
fn single_point_lands_in_the_first_voxel() {
    let p = Point3::new(3.25, -7.5, 0.125);
    let cloud = PointCloud::new(vec![p]);
    let grid = VoxelGrid::from_point_cloud(&cloud, 1.0).unwrap();

    assert_eq!(grid.origin(), p - Vector3::repeat(0.5));
    assert_eq!(grid.len(), 1);
    assert_eq!(
        grid.grid_indices().collect::<Vec<_>>(),
        vec![Point3::new(0, 0, 0)]
    );
}

#[test]
fn extreme_points_are_centered_in_their_voxels() {
    let cloud = PointCloud::new(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 2.0, 1.0)]);
    let grid = VoxelGrid::from_point_cloud(&cloud, 1.0).unwrap();

    assert_relative_eq!(grid.origin(), Point3::new(-0.5, -0.5, -0.5));
    assert!(grid.contains_voxel(Point3::new(0, 0, 0)));
    assert!(grid.contains_voxel(Point3::new(4, 2, 1)));
    assert_eq!(grid.len(), 2);
}

#[test]
fn empty_point_cloud_yields_an_empty_grid() {
    let grid = VoxelGrid::from_point_cloud(&PointCloud::default(), 0.5).unwrap();

    assert!(grid.is_empty());
    assert_eq!(grid.voxel_size(), 0.5);
    assert_eq!(grid.origin(), Point3::new(-0.25, -0.25, -0.25));
}

#[test]
fn bounds_resolution_propagates_errors() {
    let cloud = PointCloud::new(vec![Point3::origin(), Point3::new(1.0e6, 0.0, 0.0)]);

    assert_eq!(
        VoxelGrid::from_point_cloud(&cloud, -1.0).unwrap_err(),
        VoxelizationError::InvalidParameter("voxel_size <= 0")
    );
    assert_eq!(
        VoxelGrid::from_point_cloud(&cloud, 1.0e-7).unwrap_err(),
        VoxelizationError::InvalidParameter("voxel_size is too small")
    );
}
