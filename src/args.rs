// File: args.rs
// License: Apache v2.0

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct ProgramArgs {
    /// Rotation about X in degrees
    #[clap(long, allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Rotation about Y in degrees
    #[clap(long, allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Rotation about Z in degrees
    #[clap(long, allow_negative_numbers = true)]
    pub z: Option<f64>,

    #[clap(long)]
    pub reflect_x: bool,

    #[clap(long)]
    pub reflect_y: bool,

    #[clap(long)]
    pub reflect_z: bool,

    /// TOML file with a [transform] table
    #[clap(long)]
    pub config: Option<String>,

    #[clap(long)]
    pub verbose: bool,

    /// Iteration cap of the Schur and SVD iterations, 0 for unlimited
    #[clap(long, default_value_t = 1000)]
    pub max_iter: usize,

    #[clap(long, default_value_t = f64::EPSILON)]
    pub eps: f64,
}

/// Euler angles in degrees and per-axis reflection flags of one transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformArgs {
    pub x_deg: f64,
    pub y_deg: f64,
    pub z_deg: f64,
    pub reflect_x: bool,
    pub reflect_y: bool,
    pub reflect_z: bool,
}

impl TransformArgs {
    pub fn reflection_count(&self) -> usize {
        [self.reflect_x, self.reflect_y, self.reflect_z]
            .iter()
            .filter(|&&r| r)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverArgs {
    pub eps: f64,
    pub max_iter: usize,
}

impl Default for SolverArgs {
    fn default() -> Self {
        Self {
            eps: f64::EPSILON,
            max_iter: 1000,
        }
    }
}

impl From<&ProgramArgs> for SolverArgs {
    fn from(args: &ProgramArgs) -> Self {
        Self {
            eps: args.eps,
            max_iter: args.max_iter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_angles_and_switches() {
        let args = ProgramArgs::parse_from([
            "eigen-planes",
            "--x",
            "-90",
            "--z=179.5",
            "--reflect-y",
        ]);
        assert_eq!(args.x, Some(-90.0));
        assert_eq!(args.y, None);
        assert_eq!(args.z, Some(179.5));
        assert!(!args.reflect_x);
        assert!(args.reflect_y);
        assert_eq!(args.max_iter, 1000);
        assert!(args.config.is_none());
    }

    #[test]
    fn counts_reflections() {
        let mut t = TransformArgs::default();
        assert_eq!(t.reflection_count(), 0);
        t.reflect_x = true;
        t.reflect_z = true;
        assert_eq!(t.reflection_count(), 2);
    }
}
