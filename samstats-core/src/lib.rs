pub mod errors;
pub mod histogram;
pub mod stats;
pub mod tsv;

// re-export for cleaner imports
pub use self::errors::HistogramError;
pub use self::histogram::{CountBin, CountHistogram, RunningBin, RunningHistogram};
pub use self::stats::RunningStat;
