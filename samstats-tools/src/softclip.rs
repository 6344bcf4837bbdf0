use std::io;

use noodles::sam::alignment::Record;
use noodles::sam::alignment::record::Cigar as _;
use noodles::sam::alignment::record::cigar::op::Kind;

use samstats_core::CountHistogram;

use crate::consts::{READ_COUNTS_LABEL, SOFTCLIP_LABEL};
use crate::errors::ScanError;
use crate::progress::{SPINNER_UPDATE_INTERVAL, ScanReport, scan_spinner};

///
/// Computes the soft-clip distribution over a stream of alignment records:
/// the number of reads for each total count of soft-clipped bases.
///
/// Unmapped records carry no alignment, so they are unconditionally counted
/// as ignored and skipped.
///
pub fn softclip_distribution<I, R>(records: I) -> Result<(CountHistogram<usize>, ScanReport), ScanError>
where
    I: IntoIterator<Item = io::Result<R>>,
    R: Record,
{
    let mut histogram = CountHistogram::new(SOFTCLIP_LABEL, READ_COUNTS_LABEL);
    let mut report = ScanReport::default();

    let spinner = scan_spinner("Scanning reads for soft clips...");

    for result in records {
        let record = result.map_err(ScanError::Source)?;
        let flags = record.flags().map_err(ScanError::Source)?;

        if flags.is_unmapped() {
            report.ignored += 1;
        } else {
            histogram.increment(soft_clipped_bases(&record)?);
        }

        report.processed += 1;
        if report.processed % SPINNER_UPDATE_INTERVAL == 0 {
            spinner.set_message(format!("Processed {} reads", report.processed));
        }
        spinner.inc(1);
    }

    spinner.finish_with_message(format!(
        "Processed {} reads, ignored {} unmapped",
        report.processed, report.ignored
    ));

    Ok((histogram, report))
}

/// Total number of soft-clipped bases in the record's CIGAR.
fn soft_clipped_bases<R: Record>(record: &R) -> Result<usize, ScanError> {
    let mut clipped = 0;

    for op in record.cigar().iter() {
        let op = op.map_err(ScanError::Source)?;
        if op.kind() == Kind::SoftClip {
            clipped += op.len();
        }
    }

    Ok(clipped)
}
