use clap::{Arg, Command};

pub use samstats_tools::consts::SOFTCLIP_CMD;

pub fn create_softclip_cli() -> Command {
    Command::new(SOFTCLIP_CMD)
        .about("Soft-clip distribution: number of reads per soft-clipped base count.")
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
                .help("Output file for the soft-clip distribution table"),
        )
}
