// File: rotation.rs
// License: Apache v2.0

use super::args::TransformArgs;
use na::{Matrix3, Vector3};

pub fn rot_x(deg: f64) -> Matrix3<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
}

pub fn rot_y(deg: f64) -> Matrix3<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
}

pub fn rot_z(deg: f64) -> Matrix3<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
}

fn sign(flip: bool) -> f64 {
    if flip {
        -1.0
    } else {
        1.0
    }
}

pub fn reflection(x: bool, y: bool, z: bool) -> Matrix3<f64> {
    Matrix3::from_diagonal(&Vector3::new(sign(x), sign(y), sign(z)))
}

/// Combined transform `Reflection * Rx * Ry * Rz`. Applied to a column
/// vector, Rz acts first and the reflection last.
pub fn compose(t: &TransformArgs) -> Matrix3<f64> {
    let rot = rot_x(t.x_deg) * rot_y(t.y_deg) * rot_z(t.z_deg);
    reflection(t.reflect_x, t.reflect_y, t.reflect_z) * rot
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    const TOL: f64 = 1e-9;

    fn assert_orthogonal(m: &Matrix3<f64>) {
        assert_abs_diff_eq!(m.transpose() * m, Matrix3::identity(), epsilon = TOL);
    }

    #[test]
    fn zero_angle_is_exact_identity() {
        assert_eq!(rot_x(0.0), Matrix3::identity());
        assert_eq!(rot_y(0.0), Matrix3::identity());
        assert_eq!(rot_z(0.0), Matrix3::identity());
    }

    #[test]
    fn axis_rotations_are_proper_orthogonal() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let d = rng.gen_range(-1080.0..1080.0);
            for m in [rot_x(d), rot_y(d), rot_z(d)] {
                assert_orthogonal(&m);
                assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = TOL);
            }
        }
    }

    #[test]
    fn quarter_turns_match_closed_form() {
        let rx = Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0);
        let ry = Matrix3::new(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0);
        let rz = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(rot_x(90.0), rx, epsilon = TOL);
        assert_abs_diff_eq!(rot_y(90.0), ry, epsilon = TOL);
        assert_abs_diff_eq!(rot_z(90.0), rz, epsilon = TOL);
    }

    #[test]
    fn angles_wrap_by_full_turns() {
        assert_abs_diff_eq!(rot_x(370.0), rot_x(10.0), epsilon = TOL);
        assert_abs_diff_eq!(rot_y(-350.0), rot_y(10.0), epsilon = TOL);
        assert_abs_diff_eq!(rot_z(725.0), rot_z(5.0), epsilon = TOL);
    }

    #[test]
    fn reflection_flags() {
        assert_eq!(reflection(false, false, false), Matrix3::identity());
        assert_eq!(reflection(true, true, true), -Matrix3::<f64>::identity());
        assert_eq!(
            reflection(false, true, false),
            Matrix3::from_diagonal(&Vector3::new(1.0, -1.0, 1.0))
        );
        for bits in 0..8u32 {
            let (x, y, z) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let expected = (-1.0f64).powi(bits.count_ones() as i32);
            assert_eq!(reflection(x, y, z).determinant(), expected);
        }
    }

    #[test]
    fn composition_order_is_preserved() {
        let t = TransformArgs {
            x_deg: 30.0,
            y_deg: 45.0,
            z_deg: 60.0,
            reflect_x: true,
            ..Default::default()
        };
        let expected = reflection(true, false, false) * rot_x(30.0) * rot_y(45.0) * rot_z(60.0);
        assert_abs_diff_eq!(compose(&t), expected, epsilon = TOL);

        let swapped = rot_z(60.0) * rot_y(45.0) * rot_x(30.0);
        assert!((rot_x(30.0) * rot_y(45.0) * rot_z(60.0) - swapped).norm() > 1e-3);
    }

    #[test]
    fn composed_determinant_follows_reflections() {
        let mut rng = rand::thread_rng();
        for bits in 0..8u32 {
            let t = TransformArgs {
                x_deg: rng.gen_range(-360.0..360.0),
                y_deg: rng.gen_range(-360.0..360.0),
                z_deg: rng.gen_range(-360.0..360.0),
                reflect_x: bits & 1 != 0,
                reflect_y: bits & 2 != 0,
                reflect_z: bits & 4 != 0,
            };
            let m = compose(&t);
            assert_orthogonal(&m);
            let expected = (-1.0f64).powi(t.reflection_count() as i32);
            assert_abs_diff_eq!(m.determinant(), expected, epsilon = TOL);
        }
    }
}
