// File: report.rs
// License: Apache v2.0

use super::args::TransformArgs;
use super::eigsolve3x3::{Eigen3, C64};
use na::{Matrix3, Vector3};

/// Eigenpair closest to a target eigenvalue, with its direction made real.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub index: usize,
    pub direction: Vector3<f64>,
    pub distance: f64,
}

/// `a+bi` / `a-bi` with default float formatting; signed zeros print as `0`.
pub fn fmt_complex(c: &C64) -> String {
    let re = if c.re == 0.0 { 0.0 } else { c.re };
    let im = if c.im == 0.0 { 0.0 } else { c.im };
    if im.is_sign_negative() {
        format!("{}-{}i", re, -im)
    } else {
        format!("{}+{}i", re, im)
    }
}

fn fmt_triple<T>(v: &Vector3<T>, f: impl Fn(&T) -> String) -> String
where
    T: na::Scalar,
{
    format!("({}, {}, {})", f(&v[0]), f(&v[1]), f(&v[2]))
}

/// Proper transforms keep their axis with eigenvalue 1, improper ones
/// flip it with eigenvalue -1.
pub fn axis_target(m: &Matrix3<f64>) -> f64 {
    if m.determinant() < 0.0 {
        -1.0
    } else {
        1.0
    }
}

pub fn invariant_axis(eig: &Eigen3, target: f64) -> Axis {
    let target = C64::new(target, 0.0);
    let (index, distance) = (0..3)
        .map(|i| (i, (eig.value(i) - target).norm()))
        .fold((0, f64::INFINITY), |best, cur| {
            if cur.1 < best.1 {
                cur
            } else {
                best
            }
        });
    let real = eig.real_vector(index);
    let direction = real.try_normalize(1e-12).unwrap_or(real);
    Axis {
        index,
        direction,
        distance,
    }
}

pub fn render(t: &TransformArgs, m: &Matrix3<f64>, eig: &Eigen3, verbose: bool) -> String {
    let mut content = String::new();
    content.push_str(&format!("for angles: {} {} {}\n", t.x_deg, t.y_deg, t.z_deg));
    content.push_str(&format!(
        "for reflections: {} {} {}\n",
        t.reflect_x, t.reflect_y, t.reflect_z
    ));
    content.push('\n');

    if verbose {
        content.push_str(&format!("combined matrix:{:.6}", m));
        content.push_str(&format!("determinant: {}\n\n", m.determinant()));
    }

    let float = |x: &f64| format!("{}", if *x == 0.0 { 0.0 } else { *x });
    for i in 0..3 {
        content.push_str(&format!("λ_{} = {}\n", i, fmt_complex(&eig.value(i))));
        content.push_str(&format!(
            "full eigenvector_{} = {}\n",
            i,
            fmt_triple(&eig.vector(i), fmt_complex)
        ));
        content.push_str(&format!(
            "real eigenvector_{} = {}\n",
            i,
            fmt_triple(&eig.real_vector(i), float)
        ));
        content.push('\n');
    }

    let axis = invariant_axis(eig, axis_target(m));
    content.push_str(&format!(
        "invariant axis: λ_{} -> {}\n",
        axis.index,
        fmt_triple(&axis.direction, float)
    ));
    content
}
