mod error;
mod euler;
mod integral;
mod rotation;
mod types;
pub mod vector;

pub use crate::{
    error::GeometryError,
    euler::Euler,
    integral::approximate_integral,
    rotation::{rotate, to_rotation_matrix},
    types::{Cube, Quaternion, RotationMatrix, Vector3},
};
use itertools::iproduct;

/// Test two cubes for overlap with the per-corner box policy.
///
/// Each corner of `b` is treated as the center of an axis-aligned box with
/// `b`'s half extents (`b`'s rotation is ignored at this step). The cubes
/// collide when any corner of `a` lies inside, boundaries included, any of
/// those boxes.
///
/// This is an approximation and is not symmetric: `detect_collision(a, b)`
/// may differ from `detect_collision(b, a)`, and boxes overlapping without a
/// corner of `a` near a corner of `b` (a long thin bar through a small cube)
/// are reported as not colliding.
pub fn detect_collision(a: &Cube, b: &Cube) -> bool {
    let half_b = b.half_size();

    let hit = iproduct!(a.vertices(), b.vertices())
        .find(|(va, vb)| inside_corner_box(va, vb, &half_b));

    if let Some((va, vb)) = hit {
        log::trace!(
            "vertex {} of the first cube is inside the box around {}",
            vector::display(&va),
            vector::display(&vb)
        );
    }
    hit.is_some()
}

fn inside_corner_box(point: &Vector3, center: &Vector3, half: &Vector3) -> bool {
    (0..3).all(|i| point[i] >= center[i] - half[i] && point[i] <= center[i] + half[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra as na;
    use std::f64::consts::FRAC_PI_4;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn unit_cube(x: f64, y: f64, z: f64) -> Cube {
        Cube::axis_aligned(Vector3::new(x, y, z), Vector3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn cube_collides_with_itself() {
        init_logger();
        let rotation = na::UnitQuaternion::from_euler_angles(0.7, 0.1, -1.9);
        for size in [
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(0.01, 3.0, 250.0),
            Vector3::new(1e-6, 1e-6, 1e-6),
        ] {
            let cube = Cube::from_unit_rotation(Vector3::new(4.0, -2.0, 9.0), size, rotation);
            assert!(detect_collision(&cube, &cube), "size {size:?}");
        }
    }

    #[test]
    fn far_apart_cubes_do_not_collide() {
        init_logger();
        let a = unit_cube(0.0, 0.0, 0.0);
        let b = unit_cube(100.0, 0.0, 0.0);
        assert!(!detect_collision(&a, &b));
        assert!(!detect_collision(&b, &a));
    }

    #[test]
    fn overlapping_cubes_collide() {
        init_logger();
        let a = unit_cube(0.0, 0.0, 0.0);
        let b = unit_cube(0.6, 0.3, -0.2);
        assert!(detect_collision(&a, &b));
    }

    #[test]
    fn corner_box_boundary_is_inclusive() {
        init_logger();
        let a = unit_cube(0.0, 0.0, 0.0);

        // the nearest corner boxes of b start exactly at x = 0.5
        assert!(detect_collision(&a, &unit_cube(1.5, 0.0, 0.0)));
        assert!(!detect_collision(&a, &unit_cube(1.5 + 1e-9, 0.0, 0.0)));
    }

    #[test]
    fn corner_boxes_reach_past_the_faces() {
        // a is 0.2 away from b's face but inside the box around b's near corner
        let a = unit_cube(0.0, 0.0, 0.0);
        assert!(detect_collision(&a, &unit_cube(1.2, 0.0, 0.0)));
    }

    #[test]
    fn collision_is_not_symmetric() {
        init_logger();
        let small = unit_cube(0.0, 0.0, 0.0);
        let large = Cube::axis_aligned(Vector3::zeros(), Vector3::new(4.0, 4.0, 4.0));

        assert!(detect_collision(&small, &large));
        assert!(!detect_collision(&large, &small));
    }

    #[test]
    fn rotation_moves_corners_but_not_box_extents() {
        let a = unit_cube(0.0, 0.0, 0.0);
        let position = Vector3::new(1.6, 0.2, 0.0);
        let size = Vector3::new(1.0, 1.0, 1.0);
        assert!(!detect_collision(&a, &Cube::axis_aligned(position, size)));

        // turned b has a corner at x = 1.6 - sqrt(0.5), its box keeps half width 0.5
        let turned = na::UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4);
        let b = Cube::from_unit_rotation(position, size, turned);
        assert!(detect_collision(&a, &b));
    }

    #[test]
    fn thin_bar_through_cube_is_a_known_false_negative() {
        init_logger();
        let cube = unit_cube(0.0, 0.0, 0.0);
        let bar = Cube::axis_aligned(Vector3::zeros(), Vector3::new(10.0, 0.1, 0.1));

        // the volumes clearly intersect at the origin, but no corner of one
        // lies in a corner box of the other
        assert!(!detect_collision(&bar, &cube));
        assert!(!detect_collision(&cube, &bar));
    }

    #[test]
    fn rotated_bar_through_cube_is_a_known_false_negative() {
        let cube = unit_cube(0.0, 0.0, 0.0);
        let turned = na::UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4);
        let bar = Cube::from_unit_rotation(Vector3::zeros(), Vector3::new(10.0, 0.1, 0.1), turned);

        assert!(!detect_collision(&bar, &cube));
    }

    #[test]
    fn moved_cube_is_rechecked() {
        let a = unit_cube(0.0, 0.0, 0.0);
        let mut b = unit_cube(100.0, 0.0, 0.0);
        assert!(!detect_collision(&a, &b));

        b.position = Vector3::new(0.5, 0.5, 0.5);
        assert!(detect_collision(&a, &b));
    }
}
