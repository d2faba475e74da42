//! shapebench binary entry point

use clap::Parser;
use shapebench_cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.execute() {
        eprintln!("shapebench: {e:#}");
        std::process::exit(1);
    }
}
