use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use noodles::bam;

use samstats_core::tsv;
use samstats_tools::{ScanError, mismatches_by_length};

pub fn run_mismatches(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("An input BAM file is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("An output file is required.");

    let mut reader = bam::io::reader::Builder::default()
        .build_from_path(input)
        .with_context(|| format!("Couldn't open BAM file: {input}"))?;

    reader
        .read_header()
        .with_context(|| format!("Couldn't read the header of BAM file: {input}"))?;

    let (histogram, report) = mismatches_by_length(reader.records())?;
    tsv::running_histogram_to_file(&histogram, Path::new(output)).map_err(ScanError::Output)?;

    eprintln!(
        "Processed {} reads, ignored {} without NM tag",
        report.processed, report.ignored
    );

    Ok(())
}
