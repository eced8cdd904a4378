// File: eigsolve3x3.rs
// License: Apache v2.0

use super::args::SolverArgs;
use super::error::{Error, Result};
use log::warn;
use more_asserts::*;
use na::{Complex, Matrix3, Rotation3, Schur, Vector3};

pub type C64 = Complex<f64>;

/// Singular values below this fraction of the largest span the null space.
const NULL_EPS: f64 = 1e-8;
/// Overlap above which a null vector duplicates a column already taken.
const REPEAT_COS: f64 = 0.5;
/// Norm of the deviatoric part, relative to the matrix, under which the
/// matrix is treated as a multiple of the identity.
const SCALAR_EPS: f64 = 1e-12;

/// Eigenvalues and unit right eigenvectors (as columns) of a real 3x3 matrix,
/// in the order the Schur form yields them.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigen3 {
    pub values: Vector3<C64>,
    pub vectors: Matrix3<C64>,
}

impl Eigen3 {
    pub fn value(&self, i: usize) -> C64 {
        self.values[i]
    }

    pub fn vector(&self, i: usize) -> Vector3<C64> {
        self.vectors.column(i).into_owned()
    }

    pub fn real_vector(&self, i: usize) -> Vector3<f64> {
        self.vector(i).map(|c| c.re)
    }

    /// `|M v_i - lambda_i v_i|`
    pub fn residual(&self, m: &Matrix3<f64>, i: usize) -> f64 {
        let v = self.vector(i);
        (complexify(m) * v - v * self.values[i]).norm()
    }
}

fn complexify(m: &Matrix3<f64>) -> Matrix3<C64> {
    m.map(|x| C64::new(x, 0.0))
}

/// Rotate the phase so the largest component is real and positive.
fn fix_phase(v: Vector3<C64>) -> Vector3<C64> {
    let (k, _) = v
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, c)| {
            if c.norm_sqr() > best.1 {
                (i, c.norm_sqr())
            } else {
                best
            }
        });
    let pivot = v[k];
    let modulus = pivot.norm();
    debug_assert_gt!(modulus, 0.0);
    let v = v * (pivot.conj() / modulus);
    v.normalize()
}

/// Right singular vectors of `A` spanning its numerical null space, smallest
/// singular value first. The smallest one is always returned.
#[allow(non_snake_case)]
fn null_space(A: Matrix3<C64>, args: &SolverArgs) -> Result<Vec<Vector3<C64>>> {
    let (sigma, v_t) = A
        .try_svd(false, true, args.eps, args.max_iter)
        .and_then(|svd| svd.v_t.map(|v_t| (svd.singular_values, v_t)))
        .ok_or(Error::NoConvergence {
            max_iter: args.max_iter,
        })?;
    let cutoff = NULL_EPS * sigma.amax();
    let mut order = [0, 1, 2];
    order.sort_by(|&i, &j| sigma[i].total_cmp(&sigma[j]));
    Ok(order
        .iter()
        .enumerate()
        .filter(|&(rank, &k)| rank == 0 || sigma[k] <= cutoff)
        .map(|(_, &k)| fix_phase(v_t.row(k).adjoint()))
        .collect())
}

fn schur_eigvalues(m: Matrix3<f64>, eps: f64, max_iter: usize) -> Option<Vector3<C64>> {
    Schur::try_new(m, eps, max_iter).map(|schur| schur.complex_eigenvalues())
}

/// Eigenvalues of a centered, unit-norm matrix `C`. The Schur form runs on
/// `C + I` so the deflation test sees diagonal entries of order one.
#[allow(non_snake_case)]
fn eigvalues(C: &Matrix3<f64>, args: &SolverArgs) -> Result<Vector3<C64>> {
    let shifted = C + Matrix3::identity();
    let unshift = |lmd: Vector3<C64>| lmd.map(|l| l - C64::new(1.0, 0.0));
    if let Some(lmd) = schur_eigvalues(shifted, args.eps, args.max_iter) {
        return Ok(unshift(lmd));
    }
    // Francis shifts stall on shifted orthogonal Hessenberg forms such as cyclic
    // permutations. A fixed similarity moves the iteration off that orbit.
    let q = Rotation3::from_euler_angles(0.3, 0.7, 1.1).into_inner();
    let rotated = q.transpose() * shifted * q;
    warn!("Schur iteration stalled, retrying on a rotated basis");
    if let Some(lmd) = schur_eigvalues(rotated, args.eps, args.max_iter) {
        return Ok(unshift(lmd));
    }
    let relaxed = args.eps.max(f64::EPSILON) * 1e3;
    warn!("Schur iteration stalled again, retrying with eps {:.3e}", relaxed);
    schur_eigvalues(rotated, relaxed, args.max_iter)
        .map(unshift)
        .ok_or(Error::NoConvergence {
            max_iter: args.max_iter,
        })
}

#[allow(non_snake_case)]
fn eigvectors(C: &Matrix3<f64>, lmd: &Vector3<C64>, args: &SolverArgs) -> Result<Matrix3<C64>> {
    let C = complexify(C);
    let mut columns: Vec<Vector3<C64>> = Vec::with_capacity(3);
    for i in 0..3 {
        let basis = null_space(C - Matrix3::<C64>::identity() * lmd[i], args)?;
        let overlap = |v: &Vector3<C64>| {
            columns
                .iter()
                .map(|c| c.dotc(v).norm())
                .fold(0.0, f64::max)
        };
        // Members of a repeated eigenvalue skip directions already taken.
        let v = match basis.iter().find(|v| overlap(*v) < REPEAT_COS) {
            Some(v) => *v,
            None => *basis
                .iter()
                .min_by(|a, b| overlap(*a).total_cmp(&overlap(*b)))
                .unwrap_or(&basis[0]),
        };
        columns.push(v);
    }
    Ok(Matrix3::from_columns(&columns))
}

/// General (non-symmetric) eigendecomposition of a real 3x3 matrix.
///
/// The matrix is split as `scale * (mu I + d C)` with `C` traceless and of
/// unit norm. Near-scalar transforms keep their spread in `C` instead of
/// drowning it in rounding against `mu`.
#[allow(non_snake_case)]
pub fn eigsolve_3x3(A: &Matrix3<f64>, args: &SolverArgs) -> Result<Eigen3> {
    let scale = A.norm();
    if scale == 0.0 {
        return Ok(Eigen3 {
            values: Vector3::zeros(),
            vectors: Matrix3::identity(),
        });
    }
    let B = A / scale;
    let mu = B.trace() / 3.0;
    let D = B - Matrix3::identity() * mu;
    let d = D.norm();
    if d < SCALAR_EPS {
        let l = C64::new(mu * scale, 0.0);
        return Ok(Eigen3 {
            values: Vector3::new(l, l, l),
            vectors: Matrix3::identity(),
        });
    }
    let C = D / d;
    let lmd = eigvalues(&C, args)?;
    let vectors = eigvectors(&C, &lmd, args)?;
    Ok(Eigen3 {
        values: lmd.map(|l| (l * d + mu) * scale),
        vectors,
    })
}
