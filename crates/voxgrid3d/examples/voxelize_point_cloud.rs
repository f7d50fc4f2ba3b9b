extern crate nalgebra as na;

use na::{Point3, Vector3};
use voxgrid3d::shape::{PointCloud, VoxelGrid};

fn main() {
    /*
     * A helix of points shading from red to blue.
     */
    let num_points = 1000;
    let mut points = Vec::with_capacity(num_points);
    let mut colors = Vec::with_capacity(num_points);

    for i in 0..num_points {
        let t = i as f32 / num_points as f32;
        let angle = t * 8.0 * core::f32::consts::PI;
        points.push(Point3::new(angle.cos() * 2.0, t * 5.0, angle.sin() * 2.0));
        colors.push(Vector3::new(1.0 - t, 0.0, t));
    }

    let cloud = PointCloud::with_colors(points, colors);

    /*
     * Voxelize it.
     */
    let grid = VoxelGrid::from_point_cloud(&cloud, 0.25).unwrap();
    println!(
        "Voxelized {} points into {} voxels of size {}, origin: {}",
        cloud.len(),
        grid.len(),
        grid.voxel_size(),
        grid.origin()
    );

    /*
     * A dense slab for comparison.
     */
    let slab = VoxelGrid::dense(
        Point3::origin(),
        Vector3::new(0.5, 0.5, 0.5),
        0.25,
        4.0,
        0.5,
        4.0,
    )
    .unwrap();
    println!("Dense slab: {} voxels", slab.len());
}
