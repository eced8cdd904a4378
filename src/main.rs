// File: main.rs
// License: Apache v2.0

use clap::Parser;
use eigen_planes::{config, render, solve, Error, ProgramArgs, Result, SolverArgs};
use log::*;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

fn setup(program_args: &ProgramArgs) -> Result<()> {
    let level = if program_args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let pattern = "[{d(%Y-%m-%d %H:%M:%S)}] {l} {m}{n}";
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| Error::Logger(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| Error::Logger(e.to_string()))?;

    info!("{}", std::env::args().collect::<Vec<_>>().join(" "));
    Ok(())
}

fn run(program_args: &ProgramArgs) -> Result<()> {
    let transform = config::resolve(program_args)?;
    info!("resolved transform:\n{}", config::dump(&transform)?.trim_end());
    let (m, eig) = solve(&transform, &SolverArgs::from(program_args))?;
    print!("{}", render(&transform, &m, &eig, program_args.verbose));
    Ok(())
}

fn main() {
    let program_args = ProgramArgs::parse();
    if let Err(e) = setup(&program_args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    if let Err(e) = run(&program_args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
