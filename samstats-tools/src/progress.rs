use indicatif::{ProgressBar, ProgressStyle};

/// Per-scan diagnostic totals. Ignored records are a diagnostic only and
/// never affect the outcome of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Every record seen, including ignored ones.
    pub processed: u64,
    /// Records skipped for a non-error reason (missing tag, unmapped read).
    pub ignored: u64,
}

pub(crate) const SPINNER_UPDATE_INTERVAL: u64 = 10_000;

pub(crate) fn scan_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message(message);
    spinner
}
