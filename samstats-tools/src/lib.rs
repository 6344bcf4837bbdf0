pub mod consts;
pub mod errors;
pub mod mismatches;
pub mod progress;
pub mod softclip;

// Re-exports
pub use errors::ScanError;
pub use mismatches::mismatches_by_length;
pub use progress::ScanReport;
pub use softclip::softclip_distribution;
