use std::io;

use noodles::sam::alignment::Record;
use noodles::sam::alignment::record::data::field::Tag;
use noodles::sam::alignment::record::{Data as _, Sequence as _};

use samstats_core::RunningHistogram;

use crate::consts::{NM_LABEL, READ_LENGTH_LABEL};
use crate::errors::ScanError;
use crate::progress::{SPINNER_UPDATE_INTERVAL, ScanReport, scan_spinner};

///
/// Accumulates the number of mismatches (the `NM` tag) by read length over a
/// stream of alignment records.
///
/// Records without an integer `NM` tag are counted as ignored and skipped;
/// a failure to decode a record halts the scan as a source error.
///
/// # Arguments:
/// - records: fallible record stream, e.g. `bam::io::Reader::records()`
///
pub fn mismatches_by_length<I, R>(records: I) -> Result<(RunningHistogram<usize>, ScanReport), ScanError>
where
    I: IntoIterator<Item = io::Result<R>>,
    R: Record,
{
    let mut histogram = RunningHistogram::new(READ_LENGTH_LABEL, NM_LABEL);
    let mut report = ScanReport::default();

    let spinner = scan_spinner("Scanning reads for NM tags...");

    for result in records {
        let record = result.map_err(ScanError::Source)?;

        let read_length = record.sequence().len();
        let mismatches = match record.data().get(&Tag::EDIT_DISTANCE) {
            Some(value) => value.map_err(ScanError::Source)?.as_int(),
            None => None,
        };

        match mismatches {
            Some(mismatches) => histogram.add_value(read_length, mismatches as f64),
            None => report.ignored += 1,
        }

        report.processed += 1;
        if report.processed % SPINNER_UPDATE_INTERVAL == 0 {
            spinner.set_message(format!("Processed {} reads", report.processed));
        }
        spinner.inc(1);
    }

    spinner.finish_with_message(format!(
        "Processed {} reads, ignored {} without NM tag",
        report.processed, report.ignored
    ));

    Ok((histogram, report))
}
