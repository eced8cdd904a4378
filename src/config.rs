// File: config.rs
// License: Apache v2.0

use super::args::{ProgramArgs, TransformArgs};
use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct Config {
    #[serde(default)]
    transform: TransformArgs,
}

pub fn parse(content: &str, path: &str) -> Result<TransformArgs> {
    let config: Config = toml::from_str(content).map_err(|source| Error::ParseConfig {
        path: path.to_string(),
        source,
    })?;
    Ok(config.transform)
}

/// The resolved transform as a `[transform]` table that `load` reads back.
pub fn dump(t: &TransformArgs) -> Result<String> {
    Ok(toml::to_string(&Config { transform: *t })?)
}

pub fn load(path: &str) -> Result<TransformArgs> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_string(),
        source,
    })?;
    parse(&content, path)
}

/// Values given on the command line win over the file. A reflection switch
/// can only turn a reflection on.
pub fn merge(base: TransformArgs, args: &ProgramArgs) -> TransformArgs {
    TransformArgs {
        x_deg: args.x.unwrap_or(base.x_deg),
        y_deg: args.y.unwrap_or(base.y_deg),
        z_deg: args.z.unwrap_or(base.z_deg),
        reflect_x: base.reflect_x || args.reflect_x,
        reflect_y: base.reflect_y || args.reflect_y,
        reflect_z: base.reflect_z || args.reflect_z,
    }
}

pub fn resolve(args: &ProgramArgs) -> Result<TransformArgs> {
    let base = match &args.config {
        Some(path) => load(path)?,
        None => TransformArgs::default(),
    };
    Ok(merge(base, args))
}
