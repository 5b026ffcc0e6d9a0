//! Jargon CLI binary.

use std::process;

use clap::Parser;
use jargon::cli::{JargonArgs, execute};

fn main() {
    let args = JargonArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    if let Err(e) = execute(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
