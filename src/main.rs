//! CLI entry point for layered NFT generation

use clap::Parser;
use env_logger::Env;
use layered_nft::io::cli::{BatchProcessor, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
