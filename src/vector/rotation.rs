use nalgebra::{Rotation2, Vector2};

use super::Vector;

impl Vector {
    /// Cross product of the first three components.
    ///
    /// Two-dimensional inputs give `(0, 0, z)`, where `z` is the signed area of
    /// the parallelogram they span.
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::from(self.to_vector3().cross(&other.to_vector3()))
    }

    /// Rotates components 0 and 1 counter-clockwise by `angle` radians.
    /// Every other component passes through unchanged.
    pub fn rotated_2d(&self, angle: f64) -> Vector {
        let rotated = Rotation2::new(angle) * Vector2::new(self.get(0), self.get(1));
        (0..self.dimension().max(2))
            .map(|i| match i {
                0 => rotated.x,
                1 => rotated.y,
                _ => self.get(i),
            })
            .collect()
    }

    /// Rotates by `angle` radians about `axis`, right-handed.
    ///
    /// The projection onto the axis is kept; the rejection turns inside the plane
    /// it spans with `axis × rejection`, which has the rejection's own magnitude.
    /// That plane comes from the three-dimensional cross product, so only the
    /// first three components take part in the turn. A zero axis yields NaN.
    pub fn rotated(&self, angle: f64, axis: &Vector) -> Vector {
        let projection = self.projection(axis);
        let rejection = self - &projection;
        let orthogonal = axis.normalized().cross(&rejection);
        let (sin, cos) = angle.sin_cos();

        projection + rejection * cos + orthogonal * sin
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use nalgebra::{Rotation3, Unit, Vector3};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::vector::Vector;

    #[test]
    fn cross_of_planar_vectors() {
        let x = Vector::from([1.0, 0.0]);
        let y = Vector::from([0.0, 1.0]);
        assert_eq!(x.cross(&y), Vector::from([0.0, 0.0, 1.0]));
        assert_eq!(y.cross(&x), Vector::from([0.0, 0.0, -1.0]));
        assert_eq!(x.cross(&x), Vector::from([0.0, 0.0, 0.0]));
    }

    #[test]
    fn quarter_turn() {
        let v = Vector::from([3.0, 4.0]);
        assert_abs_diff_eq!(v.rotated_2d(FRAC_PI_2), Vector::from([-4.0, 3.0]), epsilon = 1e-12);
        assert_abs_diff_eq!(
            Vector::from([1.0]).rotated_2d(FRAC_PI_2),
            Vector::from([0.0, 1.0]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn planar_rotation_leaves_other_axes() {
        let v = Vector::from([1.0, 2.0, 3.0, -4.0]);
        let rotated = v.rotated_2d(0.7);
        assert_eq!(rotated.dimension(), 4);
        assert_eq!(rotated[2], 3.0);
        assert_eq!(rotated[3], -4.0);
        assert_eq!(v.rotated_2d(0.0), v);
    }

    #[test]
    fn planar_rotation_invariants() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let v: Vector = (0..rng.gen_range(2..6))
                .map(|_| rng.gen_range(-10.0..10.0))
                .collect();
            let angle = rng.gen_range(-PI..PI);
            let rotated = v.rotated_2d(angle);

            assert_abs_diff_eq!(rotated.magnitude(), v.magnitude(), epsilon = 1e-9);
            assert_abs_diff_eq!(rotated.rotated_2d(-angle), v, epsilon = 1e-9);
        }
    }

    #[test]
    fn axis_rotation_matches_rotation_matrix() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let v = Vector3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let axis = Vector3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            if axis.norm_squared() < 1e-3 {
                continue;
            }
            let angle = rng.gen_range(-PI..PI);
            let expected = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle) * v;

            assert_abs_diff_eq!(
                Vector::from(v).rotated(angle, &Vector::from(axis)),
                Vector::from(expected),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn rotation_about_own_direction_is_identity() {
        let v = Vector::from([1.0, 2.0, 2.0]);
        assert_abs_diff_eq!(v.rotated(1.3, &(&v * 4.0)), v, epsilon = 1e-12);
    }

    #[test]
    fn axis_rotation_keeps_projection() {
        let v = Vector::from([1.0, 0.0, 5.0]);
        let z = Vector::from([0.0, 0.0, 2.0]);
        assert_abs_diff_eq!(
            v.rotated(FRAC_PI_2, &z),
            Vector::from([0.0, 1.0, 5.0]),
            epsilon = 1e-12
        );
    }
}
