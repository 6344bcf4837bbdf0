mod mismatches;
mod softclip;

use std::process;

use anyhow::Result;
use clap::Command;

use samstats_tools::ScanError;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "samstats";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Per-read aggregate statistics over SAM/BAM alignment files.")
        .subcommand_required(true)
        .subcommand(mismatches::cli::create_mismatches_cli())
        .subcommand(softclip::cli::create_softclip_cli())
}

fn run() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // MISMATCHES BY LENGTH
        //
        Some((mismatches::cli::MISMATCHES_CMD, matches)) => {
            mismatches::handlers::run_mismatches(matches)
        }

        //
        // SOFTCLIP DISTRIBUTION
        //
        Some((softclip::cli::SOFTCLIP_CMD, matches)) => softclip::handlers::run_softclip(matches),

        _ => unreachable!("Subcommand not found"),
    }
}

// 1 for input/output failures, 2 for anything unexpected
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.is::<ScanError>() || err.root_cause().is::<std::io::Error>() {
        1
    } else {
        2
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("samstats: {err:#}");
        process::exit(exit_code(&err));
    }
}
