use clap::{Arg, Command};

pub use samstats_tools::consts::MISMATCHES_CMD;

pub fn create_mismatches_cli() -> Command {
    Command::new(MISMATCHES_CMD)
        .about("Distribution of mismatches (NM tag) by read length.")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .help("Input BAM file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .required(true)
                .help("Output file for the mismatches-by-length table"),
        )
}
