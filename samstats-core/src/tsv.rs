//! Tab-delimited serialization of finalized histograms.
//!
//! One header line, one line per bin in ascending key order, plain decimal
//! fields, no escaping. Write failures propagate to the caller; no atomicity
//! is attempted, so a failed write may leave a partial file behind.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::histogram::{CountHistogram, RunningHistogram};

const DELIMITER: char = '\t';

/// Formats a float with seven decimal digits, trailing zeros (and a bare
/// trailing point) trimmed, so table output is stable and human-diffable.
pub fn round_seven(value: f64) -> String {
    let mut text = format!("{value:.7}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

/// Writes a running-value histogram: header
/// `<bin>\t<value>_counts\t<value>_mean\t<value>_variance`, then one row per
/// bin.
pub fn write_running_histogram<K, W>(
    histogram: &RunningHistogram<K>,
    sink: &mut W,
) -> io::Result<()>
where
    K: Ord + Clone + Display,
    W: Write,
{
    let value_label = histogram.value_label();
    writeln!(
        sink,
        "{}{DELIMITER}{}_counts{DELIMITER}{}_mean{DELIMITER}{}_variance",
        histogram.bin_label(),
        value_label,
        value_label,
        value_label,
    )?;

    for bin in histogram.iter_sorted() {
        let [id, count, mean, variance] = bin.display_row();
        writeln!(sink, "{id}{DELIMITER}{count}{DELIMITER}{mean}{DELIMITER}{variance}")?;
    }

    Ok(())
}

/// Writes a count histogram: header `<bin>\t<value>`, then one `key\tcount`
/// row per bin.
pub fn write_count_histogram<K, W>(histogram: &CountHistogram<K>, sink: &mut W) -> io::Result<()>
where
    K: Ord + Clone + Display,
    W: Write,
{
    writeln!(
        sink,
        "{}{DELIMITER}{}",
        histogram.bin_label(),
        histogram.value_label()
    )?;

    for bin in histogram.iter_sorted() {
        writeln!(sink, "{}{DELIMITER}{}", bin.id(), bin.count())?;
    }

    Ok(())
}

pub fn running_histogram_to_file<K>(histogram: &RunningHistogram<K>, path: &Path) -> io::Result<()>
where
    K: Ord + Clone + Display,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_running_histogram(histogram, &mut writer)?;
    writer.flush()
}

pub fn count_histogram_to_file<K>(histogram: &CountHistogram<K>, path: &Path) -> io::Result<()>
where
    K: Ord + Clone + Display,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_count_histogram(histogram, &mut writer)?;
    writer.flush()
}
