use na::{Point3, Vector3};
use voxgrid3d::shape::VoxelGrid;

#[test]
fn dense_grid_covers_the_requested_box() {
    let red = Vector3::new(1.0, 0.0, 0.0);
    let grid = VoxelGrid::dense(Point3::origin(), red, 1.0, 2.0, 2.0, 1.0).unwrap();

    let mut indices: Vec<_> = grid.grid_indices().collect();
    indices.sort_by_key(|p| (p.x, p.y, p.z));

    assert_eq!(
        indices,
        vec![
            Point3::new(0, 0, 0),
            Point3::new(0, 1, 0),
            Point3::new(1, 0, 0),
            Point3::new(1, 1, 0),
        ]
    );
    assert!(grid.voxels().all(|v| v.color == red));
}

#[test]
fn dense_grid_is_reproducible() {
    let color = Vector3::new(0.2, 0.4, 0.6);
    let origin = Point3::new(3.0, -1.0, 0.5);
    let a = VoxelGrid::dense(origin, color, 0.3, 1.5, 0.9, 2.1).unwrap();
    let b = VoxelGrid::dense(origin, color, 0.3, 1.5, 0.9, 2.1).unwrap();

    assert_eq!(a.len(), 5 * 3 * 7);
    assert_eq!(a.len(), b.len());
    assert!(a.voxels().all(|v| b.voxel(v.grid_index) == Some(v)));
}

#[cfg(feature = "enhanced-determinism")]
#[test]
fn dense_grid_iterates_in_axis_major_order() {
    let grid = VoxelGrid::dense(Point3::origin(), Vector3::zeros(), 1.0, 2.0, 2.0, 2.0).unwrap();
    let indices: Vec<_> = grid.grid_indices().collect();

    assert_eq!(indices[0], Point3::new(0, 0, 0));
    assert_eq!(indices[1], Point3::new(0, 0, 1));
    assert_eq!(indices[2], Point3::new(0, 1, 0));
    assert_eq!(indices[7], Point3::new(1, 1, 1));
}
