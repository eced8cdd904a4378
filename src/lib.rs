// File: lib.rs
// License: Apache v2.0

//! Eigenpairs of a transform composed from Euler rotations and axis
//! reflections. The pipeline is `compose` -> `eigsolve_3x3` -> `render`.

mod args;
pub mod config;
mod eigsolve3x3;
mod error;
mod report;
mod rotation;

extern crate nalgebra as na;

pub use args::{ProgramArgs, SolverArgs, TransformArgs};
pub use eigsolve3x3::{eigsolve_3x3, Eigen3, C64};
pub use error::{Error, Result};
pub use report::{axis_target, fmt_complex, invariant_axis, render, Axis};
pub use rotation::{compose, reflection, rot_x, rot_y, rot_z};

use log::*;
use na::Matrix3;

/// Build the combined transform and decompose it.
pub fn solve(t: &TransformArgs, args: &SolverArgs) -> Result<(Matrix3<f64>, Eigen3)> {
    let m = compose(t);
    info!("determinant of combined transform: {}", m.determinant());
    let eig = eigsolve_3x3(&m, args)?;
    for i in 0..3 {
        debug!(
            "λ_{} = {}, residual {:.3e}",
            i,
            fmt_complex(&eig.value(i)),
            eig.residual(&m, i)
        );
    }
    Ok((m, eig))
}
