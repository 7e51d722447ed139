// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use pdirfile::{
    cli::{self, Args},
    logger::StderrLogger,
};

fn main() -> ExitCode {
    let args = Args::parse();
    StderrLogger::init(cli::level_filter(&args));

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
